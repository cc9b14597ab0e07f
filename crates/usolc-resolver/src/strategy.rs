//! User version-selection strategy (`-U`).
//!
//! Syntax: `[range][+|-]`. The range narrows the candidates; a trailing `+`
//! prefers the newest match, `-` the oldest. Without a suffix the newest
//! match wins.
//!
//! ```text
//! -U 0.4.2     use exactly 0.4.2
//! -U 0.4.*     newest 0.4.x
//! -U 0.4.*-    oldest 0.4.x
//! -U +         newest installed
//! -U -         oldest installed
//! ```

use std::fmt;

use crate::range::ANY;

/// Which end of the candidate set to pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    #[default]
    Newest,
    Oldest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strategy {
    pub range: String,
    pub tie_break: TieBreak,
}

impl Strategy {
    pub fn new(range: impl Into<String>, tie_break: TieBreak) -> Self {
        Self {
            range: range.into(),
            tie_break,
        }
    }

    /// Interpret the text passed to `-U`, or the default when absent.
    ///
    /// Only the last character is treated as a tie-break marker, so
    /// operators inside the range are never mistaken for one.
    pub fn parse(text: Option<&str>) -> Self {
        let Some(text) = text else {
            return Self::default();
        };
        if let Some(range) = text.strip_suffix('+') {
            Self::new(range, TieBreak::Newest)
        } else if let Some(range) = text.strip_suffix('-') {
            Self::new(range, TieBreak::Oldest)
        } else {
            Self::new(text, TieBreak::Newest)
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::new(ANY, TieBreak::Newest)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.tie_break {
            TieBreak::Newest => '+',
            TieBreak::Oldest => '-',
        };
        write!(f, "{}{marker}", self.range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_is_newest_any() {
        assert_eq!(Strategy::parse(None), Strategy::new("*", TieBreak::Newest));
    }

    #[test]
    fn plus_suffix_newest() {
        assert_eq!(
            Strategy::parse(Some("^1.2.0+")),
            Strategy::new("^1.2.0", TieBreak::Newest)
        );
    }

    #[test]
    fn minus_suffix_oldest() {
        assert_eq!(
            Strategy::parse(Some("^1.2.0-")),
            Strategy::new("^1.2.0", TieBreak::Oldest)
        );
        assert_eq!(
            Strategy::parse(Some(">=0.4.5 <0.4.23 || 0.4.3-")),
            Strategy::new(">=0.4.5 <0.4.23 || 0.4.3", TieBreak::Oldest)
        );
    }

    #[test]
    fn no_suffix_defaults_newest() {
        assert_eq!(
            Strategy::parse(Some(">=1.0.0 <2.0.0")),
            Strategy::new(">=1.0.0 <2.0.0", TieBreak::Newest)
        );
    }

    #[test]
    fn only_last_character_is_a_marker() {
        let s = Strategy::parse(Some(">=0.4.1 <0.4.23+"));
        assert_eq!(s, Strategy::new(">=0.4.1 <0.4.23", TieBreak::Newest));
        let s = Strategy::parse(Some("0.5.0-nightly.1"));
        assert_eq!(s, Strategy::new("0.5.0-nightly.1", TieBreak::Newest));
    }

    #[test]
    fn bare_markers_leave_empty_range() {
        assert_eq!(Strategy::parse(Some("+")), Strategy::new("", TieBreak::Newest));
        assert_eq!(Strategy::parse(Some("-")), Strategy::new("", TieBreak::Oldest));
    }

    #[test]
    fn display_round_trips_marker() {
        assert_eq!(Strategy::new("^0.4.1", TieBreak::Oldest).to_string(), "^0.4.1-");
        assert_eq!(Strategy::default().to_string(), "*+");
    }
}
