mod tick;

pub use tick::{FixedTimestep, Simulation};
