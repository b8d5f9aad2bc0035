//! Game orchestration.
//!
//! - `GameEngine`: owns the board and trackers, runs the turn cycle
//! - `Interaction`: click-to-move state machine for front ends

mod engine;
mod interaction;

pub use engine::{GameEngine, GameSnapshot};
pub use interaction::{ClickOutcome, Interaction, Selection};
