//! Two-step move entry for point-and-click front ends.
//!
//! A move is entered as two cell clicks: first one of the mover's pieces,
//! then one of its highlighted destinations. `Interaction` holds which of
//! those two steps the user is on and turns clicks into engine calls.

use tracing::debug;

use crate::core::{Player, Position};
use crate::rules::{slide_destinations, Destinations};

use super::engine::{GameEngine, GameSnapshot};

/// Where the user is in entering a move.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    AwaitingSelection,
    /// `player`'s piece `piece`, standing on `from` when it was selected.
    AwaitingDestination {
        player: Player,
        piece: usize,
        from: Position,
        legal: Destinations,
    },
}

/// What a click did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing changed.
    Ignored,
    /// A piece was (re)selected; `legal` are the cells to highlight.
    Selected { piece: usize, legal: Destinations },
    /// A move was committed.
    Moved(GameSnapshot),
}

/// Click-driven move entry for the side to move.
#[derive(Clone, Debug, Default)]
pub struct Interaction {
    selection: Selection,
}

impl Interaction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Drop any pending selection.
    pub fn clear(&mut self) {
        self.selection = Selection::AwaitingSelection;
    }

    /// Handle a click on `cell`.
    ///
    /// Clicking one of the mover's pieces selects it, replacing any earlier
    /// selection. Clicking a highlighted destination submits the move.
    /// Every other click is ignored and keeps the current selection.
    ///
    /// A selection goes stale once its player is no longer to move or its
    /// piece has left the selected cell. Stale selections are dropped on
    /// the next click, never committed.
    pub fn click(&mut self, engine: &mut GameEngine, cell: Position) -> ClickOutcome {
        if engine.status().is_terminal() {
            self.clear();
            return ClickOutcome::Ignored;
        }

        let player = engine.current_player();
        if self.is_stale(engine) {
            debug!(%player, "dropping stale selection");
            self.clear();
        }

        if let Some(piece) = engine.board().piece_index_at(player, cell) {
            let legal = slide_destinations(engine.board(), cell);
            self.selection = Selection::AwaitingDestination {
                player,
                piece,
                from: cell,
                legal: legal.clone(),
            };
            return ClickOutcome::Selected { piece, legal };
        }

        let piece = match &self.selection {
            Selection::AwaitingDestination { piece, legal, .. } if legal.contains(&cell) => *piece,
            _ => return ClickOutcome::Ignored,
        };

        let outcome = match engine.submit_move(player, piece, cell) {
            Ok(snapshot) => ClickOutcome::Moved(snapshot),
            Err(err) => {
                debug!(%err, "selected move rejected");
                ClickOutcome::Ignored
            }
        };
        self.clear();
        outcome
    }

    fn is_stale(&self, engine: &GameEngine) -> bool {
        match &self.selection {
            Selection::AwaitingSelection => false,
            Selection::AwaitingDestination {
                player,
                piece,
                from,
                ..
            } => {
                *player != engine.current_player()
                    || engine.board().piece(*player, *piece) != Some(*from)
            }
        }
    }
}
