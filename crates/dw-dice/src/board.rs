//! Dice screen state: selection, shown faces, and the rolling indicator.
//!
//! A roll draws its faces as soon as it begins but holds them back until
//! `complete_roll` is called, so the viewer never sees a partial update.
//! Every roll draws a full pair; the selection decides how many are shown.

use serde::Serialize;

use crate::face::{DiceSelection, DieFace};
use crate::roll::DiceRoller;

/// Whether the faces on the board are ready to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RollState {
    /// No roll has happened yet.
    Idle,
    /// A roll is animating; faces are hidden.
    Rolling,
    /// The last roll finished and its faces are shown.
    Resolved,
}

/// The dice on the table.
#[derive(Debug, Clone)]
pub struct DiceBoard {
    selection: DiceSelection,
    faces: [DieFace; DiceSelection::MAX_COUNT],
    pending: Option<[DieFace; DiceSelection::MAX_COUNT]>,
    state: RollState,
    roller: DiceRoller,
}

impl DiceBoard {
    /// Create a board showing one die with every face at 1.
    pub fn new(roller: DiceRoller) -> Self {
        Self {
            selection: DiceSelection::default(),
            faces: [DieFace::ONE; DiceSelection::MAX_COUNT],
            pending: None,
            state: RollState::Idle,
            roller,
        }
    }

    /// Start with a specific selection.
    pub fn with_selection(mut self, selection: DiceSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Current dice selection.
    pub fn selection(&self) -> DiceSelection {
        self.selection
    }

    /// Current roll state.
    pub fn state(&self) -> RollState {
        self.state
    }

    /// Whether a roll is in flight.
    pub fn is_rolling(&self) -> bool {
        self.state == RollState::Rolling
    }

    /// Change how many dice are shown. Allowed at any time.
    pub fn select(&mut self, selection: DiceSelection) {
        self.selection = selection;
    }

    /// Start a roll. Returns `false` if one is already in flight.
    pub fn begin_roll(&mut self) -> bool {
        if self.is_rolling() {
            return false;
        }
        let drawn = [self.roller.draw(), self.roller.draw()];
        tracing::debug!(first = %drawn[0], second = %drawn[1], "roll started");
        self.pending = Some(drawn);
        self.state = RollState::Rolling;
        true
    }

    /// Finish the in-flight roll, publishing its faces. No-op otherwise.
    pub fn complete_roll(&mut self) {
        if let Some(drawn) = self.pending.take() {
            self.faces = drawn;
            self.state = RollState::Resolved;
            tracing::debug!(faces = ?self.visible_faces(), "roll resolved");
        }
    }

    /// The faces to display, or `None` while rolling.
    pub fn visible_faces(&self) -> Option<&[DieFace]> {
        if self.is_rolling() {
            None
        } else {
            self.faces.get(..self.selection.count())
        }
    }

    /// Sum of the visible faces, or `None` while rolling.
    pub fn visible_total(&self) -> Option<u32> {
        self.visible_faces()
            .map(|faces| faces.iter().map(|f| u32::from(f.value())).sum())
    }
}
