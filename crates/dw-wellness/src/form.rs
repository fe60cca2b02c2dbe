//! The profile form and its validation rules.

use serde::{Deserialize, Serialize};

use crate::choice::{DietGoal, Mood};
use crate::error::ValidationError;

/// Minimum number of characters in a name.
pub const MIN_NAME_LEN: usize = 4;

/// Ages at or below this are rejected.
pub const MIN_AGE_EXCLUSIVE: i64 = 8;

/// Inclusive stress level bounds.
pub const STRESS_RANGE: std::ops::RangeInclusive<i64> = 1..=10;

/// Raw form input, exactly as typed or selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    /// The user's name.
    pub name: String,
    /// Age as typed.
    pub age: String,
    /// Selected mood, `None` while unselected.
    pub mood: Option<Mood>,
    /// Stress level as typed.
    pub stress_level: String,
    /// Selected diet goal, `None` while unselected.
    pub diet_goal: Option<DietGoal>,
}

/// A profile that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidProfile {
    /// Trimmed name, at least four characters.
    pub name: String,
    /// Age, greater than eight.
    pub age: u64,
    /// Selected mood.
    pub mood: Mood,
    /// Stress level in 1-10.
    pub stress_level: u8,
    /// Stress level as typed (trimmed), echoed back in the greeting.
    pub stress_input: String,
    /// Selected diet goal.
    pub diet_goal: DietGoal,
}

impl ProfileForm {
    /// Check the form, returning the first rule it breaks.
    ///
    /// Rules run in order: all fields present, name length, age bound,
    /// stress range. Text fields are trimmed before checking.
    pub fn validate(&self) -> Result<ValidProfile, ValidationError> {
        let name = self.name.trim();
        let age = self.age.trim();
        let stress = self.stress_level.trim();

        let (Some(mood), Some(diet_goal)) = (self.mood, self.diet_goal) else {
            return Err(ValidationError::MissingFields);
        };
        if name.is_empty() || age.is_empty() || stress.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        if name.chars().count() < MIN_NAME_LEN {
            return Err(ValidationError::NameTooShort);
        }

        let age = parse_number(age)
            .filter(|a| *a > MIN_AGE_EXCLUSIVE)
            .and_then(|a| u64::try_from(a).ok())
            .ok_or(ValidationError::AgeTooLow)?;

        let stress_level = parse_number(stress)
            .filter(|s| STRESS_RANGE.contains(s))
            .and_then(|s| u8::try_from(s).ok())
            .ok_or(ValidationError::StressOutOfRange)?;

        Ok(ValidProfile {
            name: name.to_string(),
            age,
            mood,
            stress_level,
            stress_input: stress.to_string(),
            diet_goal,
        })
    }

    /// Whether every field is still at its initial value.
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

/// Read the leading integer of `s`: an optional sign, then decimal digits.
///
/// Anything after the digits is ignored, so "12.5" reads as 12. Values too
/// large for `i64` saturate. Returns `None` when there are no digits.
fn parse_number(s: &str) -> Option<i64> {
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let mut digits = rest.bytes().take_while(u8::is_ascii_digit).peekable();
    digits.peek()?;
    let value = digits.fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -value } else { value })
}

/// One input on the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Name text input.
    Name,
    /// Age text input.
    Age,
    /// Mood selector.
    Mood,
    /// Stress level text input.
    StressLevel,
    /// Diet goal selector.
    DietGoal,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Age,
        Field::Mood,
        Field::StressLevel,
        Field::DietGoal,
    ];

    /// Prompt shown above the input.
    pub fn prompt(self) -> &'static str {
        match self {
            Self::Name => "Enter your name:",
            Self::Age => "Enter your age:",
            Self::Mood => "How do you feel today?",
            Self::StressLevel => "Rate your stress level (1-10):",
            Self::DietGoal => "Select your diet goal:",
        }
    }

    /// Placeholder shown while the input is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Age => "Your age",
            Self::Mood => Mood::PLACEHOLDER,
            Self::StressLevel => "Stress Level",
            Self::DietGoal => DietGoal::PLACEHOLDER,
        }
    }

    /// Whether the field is picked from a list rather than typed.
    pub fn is_choice(self) -> bool {
        matches!(self, Self::Mood | Self::DietGoal)
    }

    /// Whether only digits may be typed.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Age | Self::StressLevel)
    }

    /// Maximum number of characters, if limited.
    pub fn max_len(self) -> Option<usize> {
        match self {
            Self::StressLevel => Some(2),
            _ => None,
        }
    }

    /// Whether `c` may be typed into this field.
    pub fn accepts(self, c: char) -> bool {
        !self.is_choice() && (!self.is_numeric() || c.is_ascii_digit())
    }

    /// The next field, wrapping.
    pub fn next(self) -> Field {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The previous field, wrapping.
    pub fn prev(self) -> Field {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn form(name: &str, age: &str, stress: &str) -> ProfileForm {
        ProfileForm {
            name: name.to_string(),
            age: age.to_string(),
            mood: Some(Mood::Happy),
            stress_level: stress.to_string(),
            diet_goal: Some(DietGoal::WeightLoss),
        }
    }

    #[test]
    fn empty_name_is_missing() {
        let err = form("", "10", "5").validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingFields);
        assert_eq!(err.to_string(), "Please fill out all fields.");
    }

    #[test]
    fn blank_form_is_missing() {
        assert_eq!(
            ProfileForm::default().validate(),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn unselected_choice_is_missing() {
        let mut f = form("Alice", "20", "5");
        f.mood = None;
        assert_eq!(f.validate(), Err(ValidationError::MissingFields));
        let mut f = form("Alice", "20", "5");
        f.diet_goal = None;
        assert_eq!(f.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        assert_eq!(
            form("Alice", "   ", "5").validate(),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn short_name() {
        let err = form("Bob", "10", "5").validate().unwrap_err();
        assert_eq!(err.to_string(), "Name must be at least 4 characters.");
    }

    #[test]
    fn name_length_counts_characters() {
        assert!(form("Zoë!", "10", "5").validate().is_ok());
        assert_eq!(
            form("Zoë", "10", "5").validate(),
            Err(ValidationError::NameTooShort)
        );
    }

    #[test]
    fn age_bound() {
        let err = form("Alice", "5", "5").validate().unwrap_err();
        assert_eq!(err.to_string(), "Age must be greater than 8.");
        assert_eq!(
            form("Alice", "8", "5").validate(),
            Err(ValidationError::AgeTooLow)
        );
        assert!(form("Alice", "9", "5").validate().is_ok());
    }

    #[test]
    fn non_numeric_age_rejected() {
        assert_eq!(
            form("Alice", "old", "5").validate(),
            Err(ValidationError::AgeTooLow)
        );
        assert_eq!(
            form("Alice", "-20", "5").validate(),
            Err(ValidationError::AgeTooLow)
        );
    }

    #[test]
    fn huge_age_counts_as_old_enough() {
        let p = form("Alice", "99999999999999999999", "5").validate().unwrap();
        assert_eq!(p.age, i64::MAX as u64);
        assert_eq!(
            form("Alice", "-99999999999999999999", "5").validate(),
            Err(ValidationError::AgeTooLow)
        );
    }

    #[test]
    fn leading_integer_is_used() {
        assert_eq!(form("Alice", "12.5", "5").validate().unwrap().age, 12);
        assert_eq!(
            form("Alice", "8.9", "5").validate(),
            Err(ValidationError::AgeTooLow)
        );
        assert_eq!(form("Alice", "+20", "5").validate().unwrap().age, 20);
        assert_eq!(form("Alice", "20", "5.5").validate().unwrap().stress_level, 5);
        assert_eq!(
            form("Alice", "20", "99999999999999999999").validate(),
            Err(ValidationError::StressOutOfRange)
        );
    }

    #[test]
    fn stress_text_is_kept_as_typed() {
        let p = form("Alice", "20", " 05 ").validate().unwrap();
        assert_eq!(p.stress_level, 5);
        assert_eq!(p.stress_input, "05");
    }

    #[test]
    fn stress_bounds() {
        let err = form("Alice", "20", "11").validate().unwrap_err();
        assert_eq!(err.to_string(), "Stress level must be between 1 and 10.");
        assert_eq!(
            form("Alice", "20", "0").validate(),
            Err(ValidationError::StressOutOfRange)
        );
        assert_eq!(
            form("Alice", "20", "x").validate(),
            Err(ValidationError::StressOutOfRange)
        );
        assert!(form("Alice", "20", "1").validate().is_ok());
        assert!(form("Alice", "20", "10").validate().is_ok());
    }

    #[test]
    fn first_failing_rule_wins() {
        // Every rule is broken; only the name rule is reported.
        assert_eq!(
            form("Bob", "1", "99").validate(),
            Err(ValidationError::NameTooShort)
        );
        assert_eq!(
            form("Alice", "1", "99").validate(),
            Err(ValidationError::AgeTooLow)
        );
    }

    #[test]
    fn valid_profile_is_parsed_and_trimmed() {
        let p = form("  Alice ", " 20", "7 ").validate().unwrap();
        assert_eq!(p.name, "Alice");
        assert_eq!(p.age, 20);
        assert_eq!(p.stress_level, 7);
        assert_eq!(p.stress_input, "7");
        assert_eq!(p.mood, Mood::Happy);
        assert_eq!(p.diet_goal, DietGoal::WeightLoss);
    }

    #[test]
    fn form_loads_from_toml() {
        let f: ProfileForm = toml::from_str(
            r#"
name = "Alice"
age = "20"
mood = "sad"
stress_level = "4"
diet_goal = "muscle_gain"
"#,
        )
        .unwrap();
        assert_eq!(f.mood, Some(Mood::Sad));
        assert_eq!(f.diet_goal, Some(DietGoal::MuscleGain));
        assert!(f.validate().is_ok());

        let partial: ProfileForm = toml::from_str("name = \"Alice\"").unwrap();
        assert_eq!(partial.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn field_order_and_input_rules() {
        assert_eq!(Field::Name.next(), Field::Age);
        assert_eq!(Field::DietGoal.next(), Field::Name);
        assert_eq!(Field::Name.prev(), Field::DietGoal);
        assert!(Field::Age.accepts('7'));
        assert!(!Field::Age.accepts('a'));
        assert!(Field::Name.accepts('a'));
        assert!(!Field::Mood.accepts('a'));
        assert_eq!(Field::StressLevel.max_len(), Some(2));
        assert_eq!(Field::Mood.placeholder(), "Select your mood");
    }

    proptest! {
        #[test]
        fn stress_in_range_always_accepted(stress in 1i64..=10, age in 9i64..150) {
            let f = form("Alice", &age.to_string(), &stress.to_string());
            prop_assert!(f.validate().is_ok());
        }

        #[test]
        fn stress_out_of_range_always_rejected(stress in prop_oneof![-1000i64..1, 11i64..1000]) {
            let f = form("Alice", "30", &stress.to_string());
            prop_assert_eq!(f.validate(), Err(ValidationError::StressOutOfRange));
        }
    }
}
