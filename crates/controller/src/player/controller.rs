use glam::{Quat, Vec2, Vec3};

use crate::camera::CameraRig;
use crate::input::{ButtonAction, EdgePhase};

use super::{ConfigError, ControllerConfig, ControllerState, Mover, ObstructionQuery};

#[derive(Debug, Clone, Copy)]
struct StandingPose {
    height: f32,
    center: Vec3,
}

/// First-person movement core. Holds the immutable tuning plus the standing
/// geometry captured from the mover at attach time; all per-actor state
/// lives in [`ControllerState`].
pub struct CharacterController {
    config: ControllerConfig,
    standing: StandingPose,
}

impl CharacterController {
    /// Downward bias applied while grounded so the mover's ground probe
    /// stays engaged.
    const GROUND_STICK_VELOCITY: f32 = -2.0;
    /// Auto-run yields to an explicit backward press below this axis value.
    const AUTO_RUN_YIELD_THRESHOLD: f32 = -0.1;
    /// Jump clearance cast is shorter than the stand-up cast: jumping in a
    /// tunnel too low to stand in is allowed.
    const JUMP_CLEARANCE_FACTOR: f32 = 0.9;
    const PITCH_LIMIT_DEGREES: f32 = 90.0;

    pub fn attach<M: Mover>(config: ControllerConfig, mover: &M) -> Result<Self, ConfigError> {
        config.validate()?;

        let standing = StandingPose {
            height: mover.height(),
            center: mover.center_offset(),
        };
        if config.crouch_height >= standing.height {
            return Err(ConfigError::CrouchHeight {
                crouch: config.crouch_height,
                standing: standing.height,
            });
        }

        Ok(Self { config, standing })
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn standing_height(&self) -> f32 {
        self.standing.height
    }

    pub fn initial_state(&self) -> ControllerState {
        ControllerState {
            vertical_velocity: 0.0,
            move_axes: Vec2::ZERO,
            look_delta: Vec2::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            jump_count: 0,
            coyote_timer: 0.0,
            sprint_held: false,
            crouch_held: false,
            auto_run: false,
            is_crouching: false,
            current_height: self.standing.height,
            current_center: self.standing.center,
            current_eye_offset: Vec3::new(
                0.0,
                self.standing.height * self.config.eye_height_ratio,
                0.0,
            ),
        }
    }

    /// One fixed step. Phases run in a fixed order because crouch
    /// resolution decides the speed the motion phase selects.
    pub fn tick<W>(&self, state: &mut ControllerState, world: &mut W, camera: &mut CameraRig, dt: f32)
    where
        W: Mover + ObstructionQuery,
    {
        let grounded = world.is_grounded();
        self.track_timers(state, grounded, dt);
        self.resolve_crouch(state, world, camera, grounded, dt);
        self.integrate_look(state, camera);
        self.integrate_motion(state, world, grounded, dt);
    }

    /// Discrete input edges latch immediately into `state`; a jump edge is
    /// evaluated on the spot rather than queued for the next tick.
    pub fn handle_edge<W>(
        &self,
        state: &mut ControllerState,
        world: &W,
        action: ButtonAction,
        phase: EdgePhase,
    ) where
        W: Mover + ObstructionQuery,
    {
        let pressed = phase == EdgePhase::Started;
        match action {
            ButtonAction::Sprint => state.sprint_held = pressed,
            ButtonAction::Crouch => state.crouch_held = pressed,
            ButtonAction::AutoRun => {
                if pressed {
                    state.auto_run = !state.auto_run;
                }
            }
            ButtonAction::Jump => {
                if pressed {
                    self.try_jump(state, world);
                }
            }
        }
    }

    fn track_timers(&self, state: &mut ControllerState, grounded: bool, dt: f32) {
        if grounded {
            state.jump_count = 0;
            state.coyote_timer = self.config.coyote_time;
            if state.vertical_velocity < 0.0 {
                state.vertical_velocity = Self::GROUND_STICK_VELOCITY;
            }
        } else {
            state.coyote_timer -= dt;
        }
    }

    fn resolve_crouch<W>(
        &self,
        state: &mut ControllerState,
        world: &mut W,
        camera: &mut CameraRig,
        grounded: bool,
        dt: f32,
    ) where
        W: Mover + ObstructionQuery,
    {
        // Geometry is frozen mid-air; crouch input latched while airborne
        // takes effect on landing.
        if !grounded {
            return;
        }

        let ceiling = world.hit(world.feet_position(), Vec3::Y, self.standing.height);
        state.is_crouching = state.crouch_held || ceiling;

        let target_height = if state.is_crouching {
            self.config.crouch_height
        } else {
            self.standing.height
        };
        let target_center = Vec3::new(0.0, target_height * 0.5, 0.0);
        let target_eye = Vec3::new(0.0, target_height * self.config.eye_height_ratio, 0.0);

        let t = (dt * self.config.crouch_transition_rate).clamp(0.0, 1.0);
        state.current_height = lerp(state.current_height, target_height, t);
        state.current_center = state.current_center.lerp(target_center, t);
        state.current_eye_offset = state.current_eye_offset.lerp(target_eye, t);

        world.set_shape(state.current_height, state.current_center);
        camera.local_position = state.current_eye_offset;
    }

    fn integrate_look(&self, state: &mut ControllerState, camera: &mut CameraRig) {
        state.yaw += state.look_delta.x * self.config.look_sensitivity;
        state.pitch -= state.look_delta.y * self.config.look_sensitivity;
        state.pitch = state
            .pitch
            .clamp(-Self::PITCH_LIMIT_DEGREES, Self::PITCH_LIMIT_DEGREES);
        camera.local_rotation = Quat::from_rotation_x(state.pitch.to_radians());
    }

    fn integrate_motion<W>(&self, state: &mut ControllerState, world: &mut W, grounded: bool, dt: f32)
    where
        W: Mover + ObstructionQuery,
    {
        let target_speed = if state.is_crouching {
            self.config.crouch_speed
        } else if state.sprint_held {
            self.config.walk_speed * self.config.sprint_multiplier
        } else {
            self.config.walk_speed
        };

        let mut forward_input = state.move_axes.y;
        if state.auto_run && forward_input > Self::AUTO_RUN_YIELD_THRESHOLD {
            forward_input = 1.0;
        }

        let (right, forward) = yaw_basis(state.yaw);
        let mut planar = right * state.move_axes.x + forward * forward_input;
        if !grounded {
            planar *= self.config.air_control;
        }
        planar *= target_speed;

        state.vertical_velocity += self.config.gravity * dt;

        let velocity = Vec3::new(planar.x, state.vertical_velocity, planar.z);
        world.move_by(velocity * dt);
    }

    fn try_jump<W>(&self, state: &mut ControllerState, world: &W)
    where
        W: Mover + ObstructionQuery,
    {
        let clearance = self.standing.height * Self::JUMP_CLEARANCE_FACTOR;
        let under_ceiling = world.hit(world.feet_position(), Vec3::Y, clearance);
        let eligible = (state.coyote_timer > 0.0 || state.jump_count < self.config.max_jumps)
            && !under_ceiling;
        if !eligible {
            return;
        }

        state.vertical_velocity =
            (self.config.jump_height * 2.0 * self.config.gravity.abs()).sqrt();
        state.jump_count += 1;
        // Consuming the grace period here keeps a coyote jump from chaining
        // into a double jump in the same instant.
        state.coyote_timer = 0.0;
    }
}

fn yaw_basis(yaw_degrees: f32) -> (Vec3, Vec3) {
    let (sin_yaw, cos_yaw) = yaw_degrees.to_radians().sin_cos();
    let right = Vec3::new(cos_yaw, 0.0, -sin_yaw);
    let forward = Vec3::new(sin_yaw, 0.0, cos_yaw);
    (right, forward)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
