pub mod aggregator;
pub mod haul_log;
pub mod rng;
pub mod session;
pub mod simulation;

pub use rng::{SimRandom, SimRng};
pub use session::{MAX_STEPS, Session};
