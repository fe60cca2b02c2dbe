//! Six-sided die roller for dicewell.
//!
//! Provides the die face and selection types, a seedable roller, and the
//! `DiceBoard` screen state that hides face values while a roll is in
//! flight and publishes them together once the roll completes.

pub mod board;
pub mod error;
pub mod face;
pub mod roll;

pub use board::{DiceBoard, RollState};
pub use error::{DiceError, DiceResult};
pub use face::{DiceSelection, DieFace};
pub use roll::{DiceRoller, Roll};
