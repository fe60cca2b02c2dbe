//! Rolling dice and the resulting faces.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::face::{DiceSelection, DieFace};

/// The faces produced by one roll, in die order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Roll {
    /// Individual face values.
    pub faces: Vec<DieFace>,
}

impl Roll {
    /// Sum of all face values.
    pub fn total(&self) -> u32 {
        self.faces.iter().map(|f| u32::from(f.value())).sum()
    }

    /// Number of dice in the roll.
    pub fn count(&self) -> usize {
        self.faces.len()
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.faces.iter().map(|d| d.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}

/// Draws uniformly distributed die faces.
#[derive(Debug, Clone)]
pub struct DiceRoller {
    rng: StdRng,
}

impl DiceRoller {
    /// Create a roller with a fixed seed for reproducible rolls.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a roller seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a roller from an optional seed, falling back to entropy.
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }

    /// Draw a single face uniformly from 1-6.
    pub fn draw(&mut self) -> DieFace {
        DieFace::from_drawn(self.rng.random_range(1..=DieFace::SIDES))
    }

    /// Roll as many dice as the selection asks for.
    pub fn roll(&mut self, selection: DiceSelection) -> Roll {
        let faces = (0..selection.count()).map(|_| self.draw()).collect();
        let roll = Roll { faces };
        tracing::debug!(count = selection.count(), result = %roll, "rolled dice");
        roll
    }
}
