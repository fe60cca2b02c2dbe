//! Companion screen state: editing the form, showing the result, resetting.

use crate::choice::{self, DietGoal, Mood};
use crate::error::ValidationError;
use crate::form::{Field, ProfileForm};
use crate::recommendation::Recommendation;

/// Title while the form is being filled in.
pub const EDITING_TITLE: &str = "Virtual Mental Health Companion";

/// Title once a recommendation is shown.
pub const RESULT_TITLE: &str = "Your Virtual Mental Health Result";

/// Which view the companion screen is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The form is shown.
    Editing,
    /// The recommendation is shown.
    Result,
}

/// State owned by one companion screen.
#[derive(Debug, Clone, Default)]
pub struct CompanionSession {
    form: ProfileForm,
    error: Option<ValidationError>,
    recommendation: Option<Recommendation>,
}

impl CompanionSession {
    /// Start with an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a pre-filled form.
    pub fn with_form(form: ProfileForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    /// Current form contents.
    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    /// The error from the last rejected submission, if any.
    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// The generated recommendation, once submitted successfully.
    pub fn recommendation(&self) -> Option<&Recommendation> {
        self.recommendation.as_ref()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        if self.recommendation.is_some() {
            Phase::Result
        } else {
            Phase::Editing
        }
    }

    /// Screen title for the current phase.
    pub fn title(&self) -> &'static str {
        match self.phase() {
            Phase::Editing => EDITING_TITLE,
            Phase::Result => RESULT_TITLE,
        }
    }

    /// Accent colour keyed by the selected mood.
    pub fn accent(&self) -> (u8, u8, u8) {
        Mood::accent_or_default(self.form.mood)
    }

    /// Display text for a field: its value, or `None` when empty.
    pub fn field_text(&self, field: Field) -> Option<&str> {
        let text = match field {
            Field::Name => self.form.name.as_str(),
            Field::Age => self.form.age.as_str(),
            Field::StressLevel => self.form.stress_level.as_str(),
            Field::Mood => return self.form.mood.map(Mood::label),
            Field::DietGoal => return self.form.diet_goal.map(DietGoal::label),
        };
        (!text.is_empty()).then_some(text)
    }

    /// Replace the value of a text field. Ignored for choice fields.
    pub fn set_text(&mut self, field: Field, value: &str) {
        let Some(slot) = self.text_slot(field) else {
            return;
        };
        let limit = field.max_len().unwrap_or(usize::MAX);
        *slot = value.chars().take(limit).collect();
        self.error = None;
    }

    /// Append a character to a text field, honouring its input rules.
    ///
    /// Returns `true` if the character was accepted.
    pub fn push_char(&mut self, field: Field, c: char) -> bool {
        if !field.accepts(c) {
            return false;
        }
        let limit = field.max_len().unwrap_or(usize::MAX);
        let Some(slot) = self.text_slot(field) else {
            return false;
        };
        if slot.chars().count() >= limit {
            return false;
        }
        slot.push(c);
        self.error = None;
        true
    }

    /// Remove the last character of a text field.
    pub fn backspace(&mut self, field: Field) {
        if let Some(slot) = self.text_slot(field)
            && slot.pop().is_some()
        {
            self.error = None;
        }
    }

    /// Select a mood.
    pub fn set_mood(&mut self, mood: Option<Mood>) {
        self.form.mood = mood;
        self.error = None;
    }

    /// Select a diet goal.
    pub fn set_diet_goal(&mut self, goal: Option<DietGoal>) {
        self.form.diet_goal = goal;
        self.error = None;
    }

    /// Step a choice field forward or backward through its options.
    pub fn cycle_choice(&mut self, field: Field, forward: bool) {
        match field {
            Field::Mood => self.set_mood(choice::cycle(&Mood::ALL, self.form.mood, forward)),
            Field::DietGoal => self.set_diet_goal(choice::cycle(
                &DietGoal::ALL,
                self.form.diet_goal,
                forward,
            )),
            _ => {}
        }
    }

    /// Validate the form and, if it passes, generate the recommendation.
    ///
    /// Submitting while a result is shown is a no-op.
    pub fn submit(&mut self) -> Result<&Recommendation, ValidationError> {
        if self.recommendation.is_none() {
            self.error = None;
            match self.form.validate() {
                Ok(profile) => {
                    tracing::info!(mood = %profile.mood, diet_goal = %profile.diet_goal, "profile accepted");
                    self.recommendation = Some(Recommendation::for_profile(&profile));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "profile rejected");
                    self.error = Some(e);
                    return Err(e);
                }
            }
        }
        self.recommendation
            .as_ref()
            .ok_or(ValidationError::MissingFields)
    }

    /// Clear every field, the error, and the recommendation.
    pub fn reset(&mut self) {
        *self = Self::default();
        tracing::debug!("companion form reset");
    }

    fn text_slot(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.form.name),
            Field::Age => Some(&mut self.form.age),
            Field::StressLevel => Some(&mut self.form.stress_level),
            Field::Mood | Field::DietGoal => None,
        }
    }
}
