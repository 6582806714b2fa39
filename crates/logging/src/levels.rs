//! crates/logging/src/levels.rs
//! Severity flags and the enabled-level mask.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};
use std::str::FromStr;

use logging_sink::Priority;

use crate::error::{LevelMaskError, ParseLevelError};

/// Flag bit for [`Severity::Verbose`].
pub const VERBOSE: u32 = 1 << 0;
/// Flag bit for [`Severity::Debug`].
pub const DEBUG: u32 = 1 << 1;
/// Flag bit for [`Severity::Info`].
pub const INFO: u32 = 1 << 2;
/// Flag bit for [`Severity::Warn`].
pub const WARN: u32 = 1 << 3;
/// Flag bit for [`Severity::Error`].
pub const ERROR: u32 = 1 << 4;
/// Every severity flag combined.
pub const ALL_LEVEL: u32 = VERBOSE | DEBUG | INFO | WARN | ERROR;

/// Severity of a log call.
///
/// Each known severity owns one distinct bit so that sets of severities can be
/// combined into a [`LevelMask`]. Raw values that are not exactly one known
/// flag are kept as [`Severity::Unrecognized`]; the logger still forwards such
/// messages instead of dropping them.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Very fine-grained diagnostics.
    Verbose,
    /// Debugging output.
    Debug,
    /// Informational messages.
    Info,
    /// Potentially harmful situations.
    Warn,
    /// Errors.
    Error,
    /// A raw flag value that matches no single severity.
    Unrecognized(u32),
}

impl Severity {
    /// The five known severities, lowest first.
    pub const KNOWN: [Self; 5] = [
        Self::Verbose,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
    ];

    /// Returns the flag bits of this severity.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Verbose => VERBOSE,
            Self::Debug => DEBUG,
            Self::Info => INFO,
            Self::Warn => WARN,
            Self::Error => ERROR,
            Self::Unrecognized(bits) => bits,
        }
    }

    /// Interprets a raw flag value.
    ///
    /// ```
    /// use logging::{Severity, DEBUG};
    ///
    /// assert_eq!(Severity::from_bits(DEBUG), Severity::Debug);
    /// assert_eq!(Severity::from_bits(3), Severity::Unrecognized(3));
    /// ```
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        match bits {
            VERBOSE => Self::Verbose,
            DEBUG => Self::Debug,
            INFO => Self::Info,
            WARN => Self::Warn,
            ERROR => Self::Error,
            other => Self::Unrecognized(other),
        }
    }

    /// Returns the sink priority for a known severity.
    #[must_use]
    pub const fn priority(self) -> Option<Priority> {
        match self {
            Self::Verbose => Some(Priority::Verbose),
            Self::Debug => Some(Priority::Debug),
            Self::Info => Some(Priority::Info),
            Self::Warn => Some(Priority::Warn),
            Self::Error => Some(Priority::Error),
            Self::Unrecognized(_) => None,
        }
    }

    /// Returns the lowercase name, or `"unknown"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verbose => "verbose",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Unrecognized(_) => "unknown",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "v" | "verbose" => Some(Self::Verbose),
            "d" | "debug" => Some(Self::Debug),
            "i" | "info" => Some(Self::Info),
            "w" | "warn" | "warning" => Some(Self::Warn),
            "e" | "error" => Some(Self::Error),
            _ => None,
        }
    }
}

impl From<Priority> for Severity {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Verbose => Self::Verbose,
            Priority::Debug => Self::Debug,
            Priority::Info => Self::Info,
            Priority::Warn => Self::Warn,
            Priority::Error => Self::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized(bits) => write!(f, "unknown({bits})"),
            known => f.write_str(known.as_str()),
        }
    }
}

/// Set of severities allowed to reach the sink.
///
/// Stored as the bitwise OR of severity flags. Only values in
/// `0..=ALL_LEVEL` can be constructed; [`Default`] enables everything.
///
/// ```
/// use logging::{LevelMask, Severity};
///
/// let mask = Severity::Debug | Severity::Info;
/// assert!(mask.contains(Severity::Info));
/// assert!(!mask.contains(Severity::Error));
/// assert_eq!(mask.to_string(), "debug|info");
/// assert_eq!("debug|info".parse::<LevelMask>(), Ok(mask));
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct LevelMask(u32);

impl LevelMask {
    /// Every severity enabled.
    pub const ALL: Self = Self(ALL_LEVEL);
    /// Every severity disabled.
    pub const NONE: Self = Self(0);

    /// Validates a raw mask, accepting exactly `0..=ALL_LEVEL`.
    pub fn try_from_bits(bits: i64) -> Result<Self, LevelMaskError> {
        if (0..=i64::from(ALL_LEVEL)).contains(&bits) {
            Ok(Self(bits as u32))
        } else {
            Err(LevelMaskError::new(bits))
        }
    }

    /// Builds a mask from raw bits, discarding bits outside `ALL_LEVEL`.
    #[must_use]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & ALL_LEVEL)
    }

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Reports whether any flag of `severity` is enabled.
    ///
    /// For [`Severity::Unrecognized`] values this is true when any of its bits
    /// overlaps the mask.
    #[must_use]
    pub const fn contains(self, severity: Severity) -> bool {
        severity.bits() & self.0 != 0
    }

    /// Reports whether no severity is enabled.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Enables `severity`.
    pub fn insert(&mut self, severity: Severity) {
        self.0 |= severity.bits() & ALL_LEVEL;
    }

    /// Disables `severity`.
    pub fn remove(&mut self, severity: Severity) {
        self.0 &= !severity.bits();
    }

    /// Iterates over the enabled known severities, lowest first.
    pub fn iter(self) -> impl Iterator<Item = Severity> {
        Severity::KNOWN
            .into_iter()
            .filter(move |severity| self.contains(*severity))
    }
}

impl Default for LevelMask {
    fn default() -> Self {
        Self::ALL
    }
}

impl fmt::Debug for LevelMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LevelMask({self} = {:#07b})", self.0)
    }
}

impl fmt::Display for LevelMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        if *self == Self::ALL {
            return f.write_str("all");
        }
        let mut first = true;
        for severity in self.iter() {
            if !first {
                f.write_str("|")?;
            }
            f.write_str(severity.as_str())?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for LevelMask {
    type Err = ParseLevelError;

    /// Parses `|`- or `,`-separated severity names.
    ///
    /// Names are case-insensitive and may be abbreviated to their first
    /// letter. `all` and `none` stand for the full and empty sets.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut mask = Self::NONE;
        for token in s.split(['|', ',']) {
            let token = token.trim();
            match token.to_ascii_lowercase().as_str() {
                "all" => mask = mask | Self::ALL,
                "none" => {}
                _ => match Severity::from_name(token) {
                    Some(severity) => mask.insert(severity),
                    None => return Err(ParseLevelError::new(token)),
                },
            }
        }
        Ok(mask)
    }
}

impl TryFrom<u32> for LevelMask {
    type Error = LevelMaskError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::try_from_bits(i64::from(bits))
    }
}

impl From<LevelMask> for u32 {
    fn from(mask: LevelMask) -> Self {
        mask.0
    }
}

impl From<Severity> for LevelMask {
    fn from(severity: Severity) -> Self {
        Self::from_bits_truncate(severity.bits())
    }
}

impl BitOr for LevelMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<Severity> for LevelMask {
    type Output = Self;

    fn bitor(self, rhs: Severity) -> Self {
        self | Self::from(rhs)
    }
}

impl BitOr for Severity {
    type Output = LevelMask;

    fn bitor(self, rhs: Self) -> LevelMask {
        LevelMask::from(self) | rhs
    }
}

impl BitOrAssign<Severity> for LevelMask {
    fn bitor_assign(&mut self, rhs: Severity) {
        self.insert(rhs);
    }
}

impl BitAnd for LevelMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for LevelMask {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0 & ALL_LEVEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_distinct_bits() {
        let mut seen = 0;
        for severity in Severity::KNOWN {
            let bits = severity.bits();
            assert_eq!(bits.count_ones(), 1, "{severity} is not a single bit");
            assert_eq!(seen & bits, 0, "{severity} overlaps another flag");
            seen |= bits;
        }
        assert_eq!(seen, ALL_LEVEL);
        assert_eq!(ALL_LEVEL, 31);
    }

    #[test]
    fn from_bits_round_trips_known_flags() {
        for severity in Severity::KNOWN {
            assert_eq!(Severity::from_bits(severity.bits()), severity);
        }
        assert_eq!(Severity::from_bits(0), Severity::Unrecognized(0));
        assert_eq!(Severity::from_bits(VERBOSE | ERROR), Severity::Unrecognized(17));
        assert_eq!(Severity::from_bits(1 << 7).priority(), None);
    }

    #[test]
    fn priority_mapping_is_one_to_one() {
        for severity in Severity::KNOWN {
            let priority = severity.priority().expect("known severity");
            assert_eq!(Severity::from(priority), severity);
        }
    }

    #[test]
    fn try_from_bits_enforces_range() {
        assert_eq!(LevelMask::try_from_bits(0), Ok(LevelMask::NONE));
        assert_eq!(LevelMask::try_from_bits(31), Ok(LevelMask::ALL));
        assert_eq!(LevelMask::try_from_bits(-1).map_err(|e| e.value()), Err(-1));
        assert_eq!(LevelMask::try_from_bits(32).map_err(|e| e.value()), Err(32));
    }

    #[test]
    fn contains_checks_overlap() {
        let mask = LevelMask::from(Severity::Debug);
        assert!(mask.contains(Severity::Debug));
        assert!(!mask.contains(Severity::Info));
        assert!(mask.contains(Severity::Unrecognized(DEBUG | INFO)));
        assert!(!mask.contains(Severity::Unrecognized(1 << 9)));
    }

    #[test]
    fn insert_remove_and_complement() {
        let mut mask = LevelMask::NONE;
        mask.insert(Severity::Warn);
        mask |= Severity::Error;
        assert_eq!(mask.bits(), WARN | ERROR);

        mask.remove(Severity::Warn);
        assert_eq!(mask.bits(), ERROR);

        let rest = !mask;
        assert_eq!(rest.bits(), VERBOSE | DEBUG | INFO | WARN);
        assert_eq!((rest & mask), LevelMask::NONE);
        assert_eq!(rest | mask, LevelMask::ALL);
    }

    #[test]
    fn iter_lists_enabled_severities_in_order() {
        let mask = Severity::Error | Severity::Verbose;
        let listed: Vec<Severity> = mask.iter().collect();
        assert_eq!(listed, vec![Severity::Verbose, Severity::Error]);
    }

    #[test]
    fn display_and_parse_agree() {
        assert_eq!(LevelMask::ALL.to_string(), "all");
        assert_eq!(LevelMask::NONE.to_string(), "none");
        let mask = Severity::Info | Severity::Warn;
        assert_eq!(mask.to_string(), "info|warn");
        assert_eq!(mask.to_string().parse::<LevelMask>(), Ok(mask));
    }

    #[test]
    fn parse_accepts_letters_commas_and_case() {
        let parsed: LevelMask = "D, i ,WARNING".parse().expect("valid levels");
        assert_eq!(parsed, Severity::Debug | Severity::Info | Severity::Warn);
        assert_eq!("ALL".parse::<LevelMask>(), Ok(LevelMask::ALL));
        assert_eq!("none".parse::<LevelMask>(), Ok(LevelMask::NONE));
    }

    #[test]
    fn parse_rejects_unknown_and_empty_tokens() {
        let err = "debug|loud".parse::<LevelMask>().expect_err("unknown token");
        assert_eq!(err.token(), "loud");

        let err = "debug||info".parse::<LevelMask>().expect_err("empty token");
        assert_eq!(err.token(), "");
        assert!("".parse::<LevelMask>().is_err());
    }

    #[test]
    fn debug_format_shows_names_and_bits() {
        let debug = format!("{:?}", Severity::Debug | Severity::Info);
        assert_eq!(debug, "LevelMask(debug|info = 0b00110)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trips_mask_and_rejects_out_of_range() {
        let mask = Severity::Warn | Severity::Error;
        let json = serde_json::to_string(&mask).expect("serialize");
        assert_eq!(json, "24");
        let back: LevelMask = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, mask);
        assert!(serde_json::from_str::<LevelMask>("32").is_err());
    }
}
