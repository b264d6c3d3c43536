mod actor;
mod world;

pub use actor::{ActorContext, CapsuleActor};
pub use world::PhysicsWorld;
