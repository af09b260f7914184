//! Tone presets
//!
//! The closed set of "vibes" a caption batch can be written in. Exactly one
//! is selected at a time; `Extra` is the default.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Stylistic preset that shapes the generation instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, clap::ValueEnum)]
pub enum Tone {
    Sassy,
    Chill,
    #[default]
    Extra,
    Witty,
}

impl Tone {
    /// All tones in selector order
    pub const ALL: [Tone; 4] = [Tone::Sassy, Tone::Chill, Tone::Extra, Tone::Witty];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Sassy => "Sassy",
            Tone::Chill => "Chill",
            Tone::Extra => "Extra",
            Tone::Witty => "Witty",
        }
    }

    /// Position in the selector grid (0-based)
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Tone at a selector position, if any
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next tone in the selector (wraps around)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tone in the selector (wraps around)
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for tone names outside the closed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTone(pub String);

impl fmt::Display for UnknownTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown tone '{}' (expected one of: Sassy, Chill, Extra, Witty)",
            self.0
        )
    }
}

impl std::error::Error for UnknownTone {}

impl FromStr for Tone {
    type Err = UnknownTone;

    /// Case-insensitive, so config files can say `tone = "chill"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTone(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_extra() {
        assert_eq!(Tone::default(), Tone::Extra);
    }

    #[test]
    fn cycling_wraps_both_ways() {
        assert_eq!(Tone::Witty.next(), Tone::Sassy);
        assert_eq!(Tone::Sassy.prev(), Tone::Witty);
        assert_eq!(Tone::Chill.next(), Tone::Extra);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("chill".parse::<Tone>(), Ok(Tone::Chill));
        assert_eq!(" WITTY ".parse::<Tone>(), Ok(Tone::Witty));
        assert!("boring".parse::<Tone>().is_err());
    }

    #[test]
    fn index_roundtrip() {
        for tone in Tone::ALL {
            assert_eq!(Tone::from_index(tone.index()), Some(tone));
        }
        assert_eq!(Tone::from_index(4), None);
    }
}
