use glam::Vec3;

use crate::physics::PhysicsWorld;

#[derive(Debug, Clone, Copy)]
pub struct ArenaBlock {
    pub position: Vec3,
    pub half_extents: Vec3,
}

/// Static proving ground shared by the integration tests and the demo:
/// a large ground slab, a few jumpable steps, and a tunnel whose ceiling
/// is below standing height but above crouch height.
pub struct TestArena {
    blocks: Vec<ArenaBlock>,
}

impl Default for TestArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TestArena {
    pub const GROUND_HALF_SIZE: f32 = 80.0;
    pub const TUNNEL_CEILING: f32 = 1.2;
    pub const TUNNEL_NEAR_Z: f32 = 40.0;
    pub const TUNNEL_FAR_Z: f32 = 46.0;
    pub const TUNNEL_HALF_WIDTH: f32 = 3.0;

    pub fn new() -> Self {
        let mut blocks = Vec::new();
        Self::add_steps(&mut blocks);
        Self::add_tunnel(&mut blocks);
        Self { blocks }
    }

    fn add_steps(blocks: &mut Vec<ArenaBlock>) {
        blocks.push(ArenaBlock {
            position: Vec3::new(6.0, 0.25, 10.0),
            half_extents: Vec3::new(1.0, 0.25, 1.0),
        });
        blocks.push(ArenaBlock {
            position: Vec3::new(6.0, 0.5, 14.0),
            half_extents: Vec3::new(1.0, 0.5, 1.0),
        });
        blocks.push(ArenaBlock {
            position: Vec3::new(6.0, 1.0, 18.0),
            half_extents: Vec3::new(1.0, 1.0, 1.0),
        });
    }

    fn add_tunnel(blocks: &mut Vec<ArenaBlock>) {
        let mid_z = (Self::TUNNEL_NEAR_Z + Self::TUNNEL_FAR_Z) * 0.5;
        let half_z = (Self::TUNNEL_FAR_Z - Self::TUNNEL_NEAR_Z) * 0.5;

        // Roof slab whose underside sits at TUNNEL_CEILING.
        blocks.push(ArenaBlock {
            position: Vec3::new(0.0, Self::TUNNEL_CEILING + 0.1, mid_z),
            half_extents: Vec3::new(Self::TUNNEL_HALF_WIDTH, 0.1, half_z),
        });
    }

    pub fn blocks(&self) -> &[ArenaBlock] {
        &self.blocks
    }

    pub fn spawn(&self, physics: &mut PhysicsWorld) {
        physics.add_ground(0.0, Self::GROUND_HALF_SIZE);
        for block in &self.blocks {
            physics.add_static_box(block.position, block.half_extents);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tunnel_ceiling_sits_at_configured_height() {
        let mut physics = PhysicsWorld::new();
        TestArena::new().spawn(&mut physics);

        let inside = Vec3::new(0.0, 0.1, 43.0);
        let toi = physics.raycast(inside, Vec3::Y, 2.0, None);
        assert!(toi.is_some());
        assert!((inside.y + toi.unwrap() - TestArena::TUNNEL_CEILING).abs() < 1e-3);

        // Clear of the tunnel the sky is open.
        assert!(
            physics
                .raycast(Vec3::new(0.0, 0.1, 30.0), Vec3::Y, 5.0, None)
                .is_none()
        );
    }
}
