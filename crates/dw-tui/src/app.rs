//! Top-level application state managing the two tabs.

use std::time::Instant;

use dw_dice::DiceRoller;

use crate::config::TuiConfig;
use crate::tabs::companion::CompanionTab;
use crate::tabs::dice::DiceTab;
use crate::tabs::{InputMode, Tab, TabId};

/// Main application state for the TUI.
pub struct TuiApp {
    /// Currently active tab.
    pub active_tab: TabId,
    /// Whether to show the global help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Dice tab.
    pub dice: DiceTab,
    /// Companion tab.
    pub companion: CompanionTab,
}

impl TuiApp {
    /// Create a new app from a config.
    pub fn new(config: &TuiConfig) -> Self {
        let roller = DiceRoller::new(config.seed);
        Self {
            active_tab: config.start_tab,
            show_help: false,
            should_quit: false,
            dice: DiceTab::new(roller, config.dice, config.roll_duration()),
            companion: CompanionTab::new(config.reveal_duration()),
        }
    }

    /// Get the input mode of the currently active tab.
    pub fn active_input_mode(&self) -> InputMode {
        self.active_tab_ref().input_mode()
    }

    /// Get a reference to the active tab.
    pub fn active_tab_ref(&self) -> &dyn Tab {
        match self.active_tab {
            TabId::Dice => &self.dice,
            TabId::Companion => &self.companion,
        }
    }

    /// Get a mutable reference to the active tab.
    pub fn active_tab_mut(&mut self) -> &mut dyn Tab {
        match self.active_tab {
            TabId::Dice => &mut self.dice,
            TabId::Companion => &mut self.companion,
        }
    }

    /// Switch to a tab by ID.
    pub fn switch_tab(&mut self, tab: TabId) {
        tracing::debug!(?tab, "switch tab");
        self.active_tab = tab;
    }

    /// Advance transitions on every tab, so a roll started before switching
    /// away still resolves.
    pub fn tick(&mut self, now: Instant) {
        self.dice.tick(now);
        self.companion.tick(now);
    }
}
