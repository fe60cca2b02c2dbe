//! Building the advice text from a valid profile.

use serde::Serialize;

use crate::choice::{DietGoal, Mood};
use crate::form::ValidProfile;
use crate::tables::{diet_advice, mood_advice};

/// Generated advice for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// The full text, one line per section, each ending in a newline.
    pub text: String,
}

impl Recommendation {
    /// Compose the greeting, the mood line, and the diet goal line.
    ///
    /// `stress_level` is echoed as typed, so "05" stays "05".
    pub fn generate(mood: Mood, diet_goal: DietGoal, name: &str, stress_level: &str) -> Self {
        let text = format!(
            "Hello, {name}!\n\n\
             Based on your mood ({mood}) and stress level ({stress_level}), here are some recommendations:\n\
             {}\n\
             {}\n",
            mood_advice(mood),
            diet_advice(diet_goal),
        );
        tracing::debug!(%mood, %diet_goal, "generated recommendation");
        Self { text }
    }

    /// Generate from a validated profile.
    pub fn for_profile(profile: &ValidProfile) -> Self {
        Self::generate(
            profile.mood,
            profile.diet_goal,
            &profile.name,
            &profile.stress_input,
        )
    }

    /// Iterate over the text line by line.
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.text.lines()
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
