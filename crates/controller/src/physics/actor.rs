use glam::Vec3;
use rapier3d::control::{CharacterAutostep, CharacterLength, KinematicCharacterController};
use rapier3d::prelude::*;

use crate::player::{Mover, ObstructionQuery};

use super::PhysicsWorld;

/// Kinematic capsule body for a player actor. The rigid body sits at the
/// capsule's feet; the collider hangs off it at `center` so crouching can
/// reshape the capsule without moving the feet.
pub struct CapsuleActor {
    handle: RigidBodyHandle,
    collider: ColliderHandle,
    radius: f32,
    height: f32,
    center: Vec3,
    grounded: bool,
    character: KinematicCharacterController,
}

impl CapsuleActor {
    const MIN_HALF_HEIGHT: f32 = 0.05;

    pub fn spawn(world: &mut PhysicsWorld, feet: Vec3, radius: f32, height: f32) -> Self {
        let body = RigidBodyBuilder::kinematic_position_based()
            .translation(Vector::new(feet.x, feet.y, feet.z))
            .lock_rotations()
            .build();
        let handle = world.bodies.insert(body);

        let center = Vec3::new(0.0, height * 0.5, 0.0);
        let collider = ColliderBuilder::capsule_y(Self::half_height(height, radius), radius)
            .translation(Vector::new(center.x, center.y, center.z))
            .friction(0.0)
            .build();
        let collider = world
            .colliders
            .insert_with_parent(collider, handle, &mut world.bodies);

        let mut character = KinematicCharacterController::default();
        character.offset = CharacterLength::Absolute(0.02);
        character.up = Vector::Y;
        character.max_slope_climb_angle = 50_f32.to_radians();
        character.min_slope_slide_angle = 35_f32.to_radians();
        character.snap_to_ground = Some(CharacterLength::Absolute(0.2));
        character.autostep = Some(CharacterAutostep {
            max_height: CharacterLength::Absolute(0.35),
            min_width: CharacterLength::Absolute(0.15),
            include_dynamic_bodies: false,
        });

        log::debug!("spawned capsule actor at {feet}, radius {radius}, height {height}");

        Self {
            handle,
            collider,
            radius,
            height,
            center,
            grounded: false,
            character,
        }
    }

    pub fn handle(&self) -> RigidBodyHandle {
        self.handle
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn grounded(&self) -> bool {
        self.grounded
    }

    fn half_height(height: f32, radius: f32) -> f32 {
        (height * 0.5 - radius).max(Self::MIN_HALF_HEIGHT)
    }

    fn shape(&self) -> SharedShape {
        SharedShape::capsule_y(Self::half_height(self.height, self.radius), self.radius)
    }
}

/// Borrow pair tying a [`CapsuleActor`] to the world it lives in; this is
/// the production implementation of the controller's collaborator seams.
pub struct ActorContext<'a> {
    pub physics: &'a mut PhysicsWorld,
    pub actor: &'a mut CapsuleActor,
}

impl Mover for ActorContext<'_> {
    fn is_grounded(&self) -> bool {
        self.actor.grounded
    }

    fn feet_position(&self) -> Vec3 {
        self.physics
            .body_position(self.actor.handle)
            .unwrap_or(Vec3::ZERO)
    }

    fn height(&self) -> f32 {
        self.actor.height
    }

    fn center_offset(&self) -> Vec3 {
        self.actor.center
    }

    fn set_shape(&mut self, height: f32, center_offset: Vec3) {
        let unchanged = (height - self.actor.height).abs() < 1e-4
            && (center_offset - self.actor.center).length_squared() < 1e-8;
        if unchanged {
            return;
        }

        self.actor.height = height;
        self.actor.center = center_offset;

        let shape = self.actor.shape();
        if let Some(collider) = self.physics.colliders.get_mut(self.actor.collider) {
            collider.set_shape(shape);
            collider.set_position_wrt_parent(Pose::from_parts(
                Vector::new(center_offset.x, center_offset.y, center_offset.z),
                Rotation::IDENTITY,
            ));
        }
    }

    fn move_by(&mut self, displacement: Vec3) {
        let feet = self.feet_position();
        let shape = self.actor.shape();
        let shape_pos = Pose::from_parts(
            Vector::new(
                feet.x + self.actor.center.x,
                feet.y + self.actor.center.y,
                feet.z + self.actor.center.z,
            ),
            Rotation::IDENTITY,
        );

        let movement = self.physics.sweep_shape(
            &self.actor.character,
            self.actor.handle,
            &shape,
            shape_pos,
            displacement,
        );

        self.actor.grounded = movement.grounded;
        let corrected = Vec3::new(
            movement.translation.x,
            movement.translation.y,
            movement.translation.z,
        );
        self.physics.set_body_position(self.actor.handle, feet + corrected);
    }
}

impl ObstructionQuery for ActorContext<'_> {
    fn hit(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> bool {
        self.physics
            .raycast(origin, direction, max_distance, Some(self.actor.handle))
            .is_some()
    }
}
