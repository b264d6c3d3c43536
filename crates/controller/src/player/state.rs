use glam::{Vec2, Vec3};

/// The single mutable record every per-tick responsibility reads and
/// writes. Owned by the controller's host; one instance per actor.
#[derive(Debug, Clone)]
pub struct ControllerState {
    /// Signed vertical speed. Floored to a small negative bias while
    /// grounded so the mover's downward probe keeps detecting ground.
    pub vertical_velocity: f32,

    /// Last received planar intent, each component in [-1, 1].
    pub move_axes: Vec2,
    /// Most recent raw look input; the host owns staleness.
    pub look_delta: Vec2,

    /// Body heading in degrees.
    pub yaw: f32,
    /// Camera pitch in degrees, always within [-90, 90].
    pub pitch: f32,

    pub jump_count: u32,
    /// Counts down while airborne; may go negative, only the sign matters.
    pub coyote_timer: f32,

    pub sprint_held: bool,
    pub crouch_held: bool,
    pub auto_run: bool,
    /// Derived each grounded tick from crouch intent and ceiling state.
    pub is_crouching: bool,

    pub current_height: f32,
    pub current_center: Vec3,
    pub current_eye_offset: Vec3,
}

impl ControllerState {
    pub fn set_move_axes(&mut self, axes: Vec2) {
        self.move_axes = axes.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
    }

    pub fn set_look(&mut self, delta: Vec2) {
        self.look_delta = delta;
    }
}
