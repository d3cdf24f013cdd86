//! Guess pool selection modes

use std::fmt;
use std::str::FromStr;

/// Which words the selector may guess
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Only words still consistent with the feedback
    Hard,
    /// Any vocabulary word, including ones already ruled out
    #[default]
    Easy,
}

impl Mode {
    /// Create a mode from its name ("hard" or "easy"), case-insensitively
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "hard" => Some(Self::Hard),
            "easy" => Some(Self::Easy),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hard => "hard",
            Self::Easy => "easy",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("Invalid mode: {s} (expected 'hard' or 'easy')"))
    }
}
