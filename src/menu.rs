//! Pre-match setup menu
//!
//! A two-step picker driven by discrete actions: choose a color scheme, then
//! a difficulty. The menu owns only cursor state; when the final pick is
//! confirmed it hands back a finished [`SessionConfig`] and goes inert.

use crate::settings::{ColorScheme, Difficulty, Palette, SessionConfig};
use crate::sim::Arena;

/// Menu stages, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuStage {
    SchemeSelect,
    DifficultySelect,
    /// Both picks confirmed; further input is ignored
    Done,
}

/// Discrete actions fed to the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    Confirm,
}

/// Cursor state for the setup menu
#[derive(Debug, Clone)]
pub struct Menu {
    stage: MenuStage,
    scheme_index: usize,
    difficulty_index: usize,
}

impl Menu {
    pub fn new() -> Self {
        Self {
            stage: MenuStage::SchemeSelect,
            scheme_index: 0,
            // cursor starts on Medium
            difficulty_index: 1,
        }
    }

    pub fn stage(&self) -> MenuStage {
        self.stage
    }

    /// Labels for the current stage's options
    pub fn options(&self) -> Vec<&'static str> {
        match self.stage {
            MenuStage::SchemeSelect => ColorScheme::ALL.iter().map(|s| s.as_str()).collect(),
            MenuStage::DifficultySelect | MenuStage::Done => {
                Difficulty::ALL.iter().map(|d| d.as_str()).collect()
            }
        }
    }

    /// Index of the highlighted option in the current stage
    pub fn highlighted(&self) -> usize {
        match self.stage {
            MenuStage::SchemeSelect => self.scheme_index,
            MenuStage::DifficultySelect | MenuStage::Done => self.difficulty_index,
        }
    }

    /// Palette of the scheme under the cursor, for live preview
    pub fn preview(&self) -> Palette {
        ColorScheme::ALL[self.scheme_index].palette()
    }

    /// Feed one action. Returns the finished config when the final pick
    /// confirms, `None` otherwise (including anything after Done).
    pub fn handle(&mut self, input: MenuInput) -> Option<SessionConfig> {
        match self.stage {
            MenuStage::SchemeSelect => {
                let len = ColorScheme::ALL.len();
                match input {
                    MenuInput::Up => self.scheme_index = (self.scheme_index + len - 1) % len,
                    MenuInput::Down => self.scheme_index = (self.scheme_index + 1) % len,
                    MenuInput::Confirm => self.stage = MenuStage::DifficultySelect,
                }
                None
            }
            MenuStage::DifficultySelect => {
                let len = Difficulty::ALL.len();
                match input {
                    MenuInput::Up => {
                        self.difficulty_index = (self.difficulty_index + len - 1) % len;
                        None
                    }
                    MenuInput::Down => {
                        self.difficulty_index = (self.difficulty_index + 1) % len;
                        None
                    }
                    MenuInput::Confirm => {
                        self.stage = MenuStage::Done;
                        Some(self.config())
                    }
                }
            }
            MenuStage::Done => None,
        }
    }

    /// Session config as currently picked
    pub fn config(&self) -> SessionConfig {
        SessionConfig {
            arena: Arena::default(),
            colors: ColorScheme::ALL[self.scheme_index],
            difficulty: Difficulty::ALL[self.difficulty_index],
        }
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}
