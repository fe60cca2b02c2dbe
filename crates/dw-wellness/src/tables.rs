//! Advice tables keyed by mood and diet goal.
//!
//! Each table is an exhaustive match, so adding a variant without advice
//! fails to compile instead of silently producing no line.

use crate::choice::{DietGoal, Mood};

/// Advice line for a mood.
pub fn mood_advice(mood: Mood) -> &'static str {
    match mood {
        Mood::Happy => {
            "Keep up the positive vibes! Consider a balanced diet rich in fruits and vegetables."
        }
        Mood::Sad => {
            "Engage in light physical activity and try comforting foods like oatmeal or dark chocolate."
        }
        Mood::Anxious => {
            "Practice mindfulness and eat foods rich in omega-3 fatty acids like salmon or walnuts."
        }
        Mood::Angry => {
            "Consider calming activities like meditation and foods like yogurt or dark leafy greens."
        }
        Mood::Excited => {
            "Channel that excitement into creative activities or workouts, and enjoy balanced meals!"
        }
    }
}

/// Advice line for a diet goal.
pub fn diet_advice(goal: DietGoal) -> &'static str {
    match goal {
        DietGoal::WeightLoss => {
            "Consider portion control and try incorporating more fruits and vegetables into your meals."
        }
        DietGoal::MuscleGain => "Focus on high-protein foods like chicken, fish, and legumes.",
        DietGoal::MaintainHealth => {
            "Enjoy a balanced diet with whole grains, lean proteins, and plenty of water."
        }
    }
}
