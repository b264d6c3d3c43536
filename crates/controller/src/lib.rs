pub mod camera;
pub mod input;
pub mod map;
pub mod physics;
pub mod player;
pub mod simulation;

pub use camera::CameraRig;
pub use input::{ButtonAction, Buttons, EdgePhase, InputSample, InputTracker};
pub use map::TestArena;
pub use physics::{ActorContext, CapsuleActor, PhysicsWorld};
pub use player::{
    CharacterController, ConfigError, ControllerConfig, ControllerState, Mover, ObstructionQuery,
};
pub use simulation::{FixedTimestep, Simulation};
