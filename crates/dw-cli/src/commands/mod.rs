pub mod advise;
pub mod choices;
pub mod roll;
pub mod tui;
