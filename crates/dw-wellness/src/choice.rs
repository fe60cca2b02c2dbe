//! The two enumerated choices on the form: mood and diet goal.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WellnessError;

/// Accent colour used when no mood is selected.
pub const DEFAULT_ACCENT: (u8, u8, u8) = (0x00, 0x79, 0x6B);

/// How the user feels today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// Happy.
    Happy,
    /// Sad.
    Sad,
    /// Anxious.
    Anxious,
    /// Excited.
    Excited,
    /// Angry.
    Angry,
}

impl Mood {
    /// All moods in selector order.
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Anxious,
        Mood::Excited,
        Mood::Angry,
    ];

    /// Selector text shown when nothing is chosen.
    pub const PLACEHOLDER: &'static str = "Select your mood";

    /// Stable lowercase key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Anxious => "anxious",
            Self::Excited => "excited",
            Self::Angry => "angry",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Sad => "Sad",
            Self::Anxious => "Anxious",
            Self::Excited => "Excited",
            Self::Angry => "Angry",
        }
    }

    /// Accent colour for input borders and the result frame.
    pub fn accent(self) -> (u8, u8, u8) {
        match self {
            Self::Happy => (0x21, 0x95, 0xF3),
            Self::Sad => (0xA7, 0x77, 0xFF),
            Self::Anxious => (0xFF, 0x6A, 0x00),
            Self::Angry => (0xF4, 0x36, 0x5C),
            Self::Excited => (0x4C, 0xAF, 0x50),
        }
    }

    /// Accent for an optional selection.
    pub fn accent_or_default(mood: Option<Mood>) -> (u8, u8, u8) {
        mood.map_or(DEFAULT_ACCENT, Mood::accent)
    }
}

impl FromStr for Mood {
    type Err = WellnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.key() == key)
            .ok_or_else(|| WellnessError::UnknownMood(s.to_string()))
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// What the user wants from their diet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietGoal {
    /// Lose weight.
    WeightLoss,
    /// Gain muscle.
    MuscleGain,
    /// Stay healthy.
    MaintainHealth,
}

impl DietGoal {
    /// All goals in selector order.
    pub const ALL: [DietGoal; 3] = [
        DietGoal::WeightLoss,
        DietGoal::MuscleGain,
        DietGoal::MaintainHealth,
    ];

    /// Selector text shown when nothing is chosen.
    pub const PLACEHOLDER: &'static str = "Select your goal";

    /// Stable snake_case key.
    pub fn key(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
            Self::MaintainHealth => "maintain_health",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight Loss",
            Self::MuscleGain => "Muscle Gain",
            Self::MaintainHealth => "Maintain Health",
        }
    }
}

impl FromStr for DietGoal {
    type Err = WellnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|g| g.key() == key)
            .ok_or_else(|| WellnessError::UnknownDietGoal(s.to_string()))
    }
}

impl std::fmt::Display for DietGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Step through an optional choice list, wrapping through `None`.
///
/// `None` is the placeholder slot in front of the first entry.
pub fn cycle<T: Copy + PartialEq>(all: &[T], current: Option<T>, forward: bool) -> Option<T> {
    let slots = all.len() + 1;
    let idx = current
        .and_then(|c| all.iter().position(|x| *x == c))
        .map_or(0, |i| i + 1);
    let next = if forward {
        (idx + 1) % slots
    } else {
        (idx + slots - 1) % slots
    };
    next.checked_sub(1).and_then(|i| all.get(i).copied())
}
