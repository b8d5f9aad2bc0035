//! Move selection for automated players.
//!
//! Policies are trait-based so callers can plug in their own:
//! - `FirstLegalMove`: deterministic first-found scan
//! - `UniformOpponent`: uniform random over legal moves
//! - `FnPolicy`: any `Fn(&Board, Player) -> Option<Move>`

pub mod policy;

pub use policy::{from_fn, FirstLegalMove, FnPolicy, OpponentPolicy, UniformOpponent};
