//! Session parameters chosen before kickoff
//!
//! The menu phase picks a color scheme and a difficulty, bundles them into a
//! [`SessionConfig`], and hands that to the simulation once. Nothing in here
//! changes after the first tick.

use serde::{Deserialize, Serialize};

use crate::sim::Arena;

/// Opponent steering presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Variants in menu display order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Per-tick acceleration the opponent's steering applies on each axis
    pub fn gain(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.2,
            Difficulty::Medium => 0.3,
            Difficulty::Hard => 0.4,
        }
    }
}

/// An RGB triple, 0-255 per channel
pub type Rgb = (u8, u8, u8);

/// Resolved colors for one scheme. Pure presentation data - the simulation
/// carries the [`ColorScheme`] token and never looks inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Rgb,
    pub player: Rgb,
    pub opponent: Rgb,
    pub ball: Rgb,
    pub goal: Rgb,
    pub text: Rgb,
}

/// Named color scheme token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ColorScheme {
    #[default]
    Default,
    OceanBreeze,
    NightMode,
}

impl ColorScheme {
    /// Variants in menu display order
    pub const ALL: [ColorScheme; 3] = [
        ColorScheme::Default,
        ColorScheme::OceanBreeze,
        ColorScheme::NightMode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Default => "Default",
            ColorScheme::OceanBreeze => "Ocean Breeze",
            ColorScheme::NightMode => "Night Mode",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(ColorScheme::Default),
            "ocean breeze" | "ocean" => Some(ColorScheme::OceanBreeze),
            "night mode" | "night" => Some(ColorScheme::NightMode),
            _ => None,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            ColorScheme::Default => Palette {
                background: (0, 0, 0),
                player: (0, 0, 255),
                opponent: (255, 0, 0),
                ball: (255, 255, 255),
                goal: (0, 255, 0),
                text: (255, 255, 255),
            },
            ColorScheme::OceanBreeze => Palette {
                background: (0, 128, 128),
                player: (0, 255, 255),
                opponent: (255, 128, 0),
                ball: (255, 255, 255),
                goal: (0, 255, 128),
                text: (255, 255, 255),
            },
            ColorScheme::NightMode => Palette {
                background: (0, 0, 0),
                player: (255, 255, 255),
                opponent: (128, 128, 128),
                ball: (255, 0, 0),
                goal: (0, 0, 255),
                text: (255, 255, 255),
            },
        }
    }
}

/// Everything the pre-match phase decides, fixed for the session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    pub arena: Arena,
    pub colors: ColorScheme,
    pub difficulty: Difficulty,
}
