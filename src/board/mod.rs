//! Board representation.
//!
//! - `Cell`: tagged cell contents (`Empty` or `Owned(player)`)
//! - `Signature`: canonical occupancy key for repetition detection
//! - `Board`: the grid and per-player piece lists

pub mod cell;
pub mod state;

pub use cell::{Cell, Signature};
pub use state::{Board, PieceSet};
