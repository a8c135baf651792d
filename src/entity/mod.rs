pub mod events;
pub mod mon;

pub use events::{CareEvent, CareEventKind, EvolutionEvent, MistakeReason};
pub use mon::{Mon, MonStats};
