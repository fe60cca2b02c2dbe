//! Virtual mental health companion.
//!
//! Collects a five-field profile (name, age, mood, stress level, diet goal),
//! validates it with a first-failure-wins rule list, and turns the valid
//! profile into advice text built from two fixed tables.

pub mod choice;
pub mod error;
pub mod form;
pub mod recommendation;
pub mod session;
pub mod tables;

pub use choice::{DietGoal, Mood};
pub use error::{ValidationError, WellnessError, WellnessResult};
pub use form::{Field, ProfileForm, ValidProfile};
pub use recommendation::Recommendation;
pub use session::{CompanionSession, Phase};
