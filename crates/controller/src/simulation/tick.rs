use glam::Vec3;

use crate::camera::CameraRig;
use crate::input::{InputSample, InputTracker};
use crate::map::TestArena;
use crate::physics::{ActorContext, CapsuleActor, PhysicsWorld};
use crate::player::{CharacterController, ConfigError, ControllerConfig, ControllerState};

pub struct FixedTimestep {
    tick_rate: u32,
    dt: f32,
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            tick_rate,
            dt: 1.0 / tick_rate as f32,
            accumulator: 0.0,
        }
    }

    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn accumulate(&mut self, delta: f32) {
        self.accumulator += delta.min(0.25);
    }

    pub fn consume_tick(&mut self) -> bool {
        if self.accumulator >= self.dt {
            self.accumulator -= self.dt;
            true
        } else {
            false
        }
    }

    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }
}

/// Fixed-step harness wiring one controller-driven actor into the physics
/// world. Per tick: latch sampled axes, replay button edges, run the
/// controller, then step the pipeline.
pub struct Simulation {
    physics: PhysicsWorld,
    actor: CapsuleActor,
    controller: CharacterController,
    pub state: ControllerState,
    pub camera: CameraRig,
    timestep: FixedTimestep,
    tracker: InputTracker,
    tick: u64,
}

impl Simulation {
    pub const PLAYER_RADIUS: f32 = 0.3;
    pub const PLAYER_HEIGHT: f32 = 1.8;

    pub fn new(config: ControllerConfig, tick_rate: u32, spawn: Vec3) -> Result<Self, ConfigError> {
        let mut physics = PhysicsWorld::new();
        physics.set_timestep(1.0 / tick_rate as f32);
        TestArena::new().spawn(&mut physics);

        let mut actor =
            CapsuleActor::spawn(&mut physics, spawn, Self::PLAYER_RADIUS, Self::PLAYER_HEIGHT);

        let controller = {
            let ctx = ActorContext {
                physics: &mut physics,
                actor: &mut actor,
            };
            CharacterController::attach(config, &ctx)?
        };
        let state = controller.initial_state();

        let mut camera = CameraRig::new();
        camera.local_position = state.current_eye_offset;

        log::debug!("simulation ready at {} Hz", tick_rate);

        Ok(Self {
            physics,
            actor,
            controller,
            state,
            camera,
            timestep: FixedTimestep::new(tick_rate),
            tracker: InputTracker::new(),
            tick: 0,
        })
    }

    pub fn controller(&self) -> &CharacterController {
        &self.controller
    }

    pub fn dt(&self) -> f32 {
        self.timestep.dt()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn grounded(&self) -> bool {
        self.actor.grounded()
    }

    pub fn feet_position(&self) -> Vec3 {
        self.physics
            .body_position(self.actor.handle())
            .unwrap_or(Vec3::ZERO)
    }

    /// Advance with wall-clock time; whole fixed ticks are consumed from
    /// the accumulator. Returns the number of ticks run.
    pub fn update(&mut self, delta: f32, sample: InputSample) -> u32 {
        self.timestep.accumulate(delta);

        let mut ticks_run = 0;
        while self.timestep.consume_tick() {
            self.step(sample);
            ticks_run += 1;
        }
        ticks_run
    }

    /// Run exactly one fixed tick with the given input sample.
    pub fn step(&mut self, sample: InputSample) {
        let dt = self.timestep.dt();
        self.state.set_move_axes(sample.move_axes);
        self.state.set_look(sample.look_delta);

        let edges = self.tracker.edges(sample.buttons);
        let mut ctx = ActorContext {
            physics: &mut self.physics,
            actor: &mut self.actor,
        };
        for (action, phase) in edges {
            self.controller.handle_edge(&mut self.state, &ctx, action, phase);
        }
        self.controller.tick(&mut self.state, &mut ctx, &mut self.camera, dt);

        self.physics.step();
        self.tick += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_timestep_accumulation() {
        let mut ts = FixedTimestep::new(60);

        ts.accumulate(1.0 / 30.0);
        assert!(ts.consume_tick());
        assert!(ts.consume_tick());
        assert!(!ts.consume_tick());
    }

    #[test]
    fn large_deltas_clamped() {
        let mut ts = FixedTimestep::new(60);

        ts.accumulate(10.0);
        let mut ticks = 0;
        while ts.consume_tick() {
            ticks += 1;
        }
        assert_eq!(ticks, 15);
    }

    #[test]
    fn update_consumes_whole_ticks() {
        let mut sim = Simulation::new(
            ControllerConfig::default(),
            60,
            Vec3::new(0.0, 0.5, 0.0),
        )
        .unwrap();

        let ticks = sim.update(1.0 / 30.0, InputSample::default());
        assert_eq!(ticks, 2);
        assert_eq!(sim.tick_count(), 2);
    }
}
