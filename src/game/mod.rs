pub mod engine;
pub mod error;
pub mod frame;
pub mod rules;

pub use engine::{Game, ALL_PINS, FRAMES, MAX_THROWS};
pub use error::GameError;
pub use frame::{FrameKind, FrameScore};
pub use rules::Rules;
