//! bowling-score: a ten-pin bowling score engine.
//!
//! A [`Game`] records pin counts one throw at a time and computes the
//! official score through any completed frame, applying strike and spare
//! bonuses.
//!
//! ```
//! use bowling_score::Game;
//!
//! let mut game = Game::new();
//! game.add(10).unwrap();
//! game.add(3).unwrap();
//! game.add(6).unwrap();
//! assert_eq!(game.score_for_frame(1).unwrap(), 19);
//! assert_eq!(game.score().unwrap(), 28);
//! assert_eq!(game.current_frame(), 3);
//! ```
pub mod config;
pub mod game;
pub mod output;
pub mod primes;

pub use game::{FrameKind, FrameScore, Game, GameError, Rules};
