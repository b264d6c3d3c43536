use glam::Vec3;

/// Collision body the controller steers. Resolves collisions internally:
/// `move_by` sweeps the capsule through the world, applies whatever motion
/// survives, and updates the grounded report for the next tick.
pub trait Mover {
    fn is_grounded(&self) -> bool;

    /// World position of the capsule's lowest point.
    fn feet_position(&self) -> Vec3;

    fn height(&self) -> f32;

    fn center_offset(&self) -> Vec3;

    fn set_shape(&mut self, height: f32, center_offset: Vec3);

    fn move_by(&mut self, displacement: Vec3);
}

/// Synchronous, side-effect-free obstruction probe against world geometry.
/// The actor's own body is never part of the result.
pub trait ObstructionQuery {
    fn hit(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> bool;
}
