pub mod decay;
pub mod tick;

pub use decay::process_elapsed;
pub use tick::{run_tick, TickEvent};
