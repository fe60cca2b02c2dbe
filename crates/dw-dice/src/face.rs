//! Die faces and the one-or-two dice selection.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};

/// The resolved value shown on a six-sided die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DieFace(u8);

impl DieFace {
    /// The lowest face, shown before the first roll.
    pub const ONE: DieFace = DieFace(1);

    /// Number of sides on the die.
    pub const SIDES: u8 = 6;

    /// Create a face, rejecting values outside 1-6.
    pub fn new(value: u8) -> DiceResult<Self> {
        if (1..=Self::SIDES).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DiceError::InvalidFace(u32::from(value)))
        }
    }

    /// Wrap a value the caller drew from `1..=SIDES`.
    pub(crate) fn from_drawn(value: u8) -> Self {
        debug_assert!((1..=Self::SIDES).contains(&value), "drawn face {value}");
        Self(value)
    }

    /// The face value (1-6).
    pub fn value(self) -> u8 {
        self.0
    }

    /// Pips per row, top to bottom, as drawn on the face.
    pub fn pip_rows(self) -> &'static [u8] {
        match self.0 {
            1 => &[1],
            2 => &[1, 1],
            3 => &[1, 1, 1],
            4 => &[2, 2],
            5 => &[2, 1, 2],
            _ => &[3, 3],
        }
    }
}

impl TryFrom<u32> for DieFace {
    type Error = DiceError;

    fn try_from(value: u32) -> DiceResult<Self> {
        u8::try_from(value)
            .map_err(|_| DiceError::InvalidFace(value))
            .and_then(Self::new)
    }
}

impl From<DieFace> for u32 {
    fn from(face: DieFace) -> u32 {
        u32::from(face.0)
    }
}

impl std::fmt::Display for DieFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How many dice are on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum DiceSelection {
    /// A single die.
    #[default]
    One,
    /// A pair of dice.
    Two,
}

impl DiceSelection {
    /// Both selections in button order.
    pub const ALL: [DiceSelection; 2] = [DiceSelection::One, DiceSelection::Two];

    /// The largest number of dice a selection can show.
    pub const MAX_COUNT: usize = 2;

    /// Number of dice for this selection.
    pub fn count(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    /// Button label for the selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::One => "1 Dice",
            Self::Two => "2 Dice",
        }
    }
}

impl TryFrom<u32> for DiceSelection {
    type Error = DiceError;

    fn try_from(value: u32) -> DiceResult<Self> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            other => Err(DiceError::InvalidCount(other.to_string())),
        }
    }
}

impl From<DiceSelection> for u32 {
    fn from(selection: DiceSelection) -> u32 {
        match selection {
            DiceSelection::One => 1,
            DiceSelection::Two => 2,
        }
    }
}

impl FromStr for DiceSelection {
    type Err = DiceError;

    fn from_str(s: &str) -> DiceResult<Self> {
        match s.trim() {
            "1" | "one" => Ok(Self::One),
            "2" | "two" => Ok(Self::Two),
            other => Err(DiceError::InvalidCount(other.to_string())),
        }
    }
}

impl std::fmt::Display for DiceSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.count())
    }
}
