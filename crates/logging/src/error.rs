//! crates/logging/src/error.rs
//! Error types surfaced by the facade.

use thiserror::Error;

use crate::levels::ALL_LEVEL;

/// A format string could not be applied to the supplied arguments.
///
/// This is the only failure a logging call reports to its caller. Nothing is
/// written to the sink when formatting fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum FormatError {
    /// A specifier refers to an argument position that was not supplied.
    #[error("format specifier requires argument {index} but only {supplied} were supplied")]
    MissingArgument {
        /// One-based position of the missing argument.
        index: usize,
        /// Number of arguments supplied.
        supplied: usize,
    },
    /// A specifier cannot render the argument at its position.
    #[error("conversion '%{conversion}' cannot format {found} argument")]
    Mismatch {
        /// Conversion character of the offending specifier.
        conversion: char,
        /// Kind of the argument found at that position.
        found: &'static str,
    },
    /// The conversion character is not recognised.
    #[error("unknown format conversion '%{0}'")]
    UnknownConversion(char),
    /// An integer given to `%c` that is not a Unicode scalar value.
    #[error("{0} is not a valid code point for '%c'")]
    InvalidCodePoint(i128),
    /// The format string ends inside a specifier.
    #[error("format string ends inside a conversion specifier")]
    Incomplete,
    /// An explicit argument index of zero (`%0$s`).
    #[error("argument index must start at 1")]
    InvalidIndex,
    /// A width, precision or index too large to represent.
    #[error("width, precision or argument index is too large")]
    WidthOverflow,
    /// A flag that does not apply to the conversion, such as `0` with `%s`.
    #[error("flag '{flag}' is not valid for conversion '%{conversion}'")]
    FlagMismatch {
        /// The offending flag.
        flag: char,
        /// Conversion character of the specifier.
        conversion: char,
    },
}

/// A level mask outside `0..=ALL_LEVEL`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("log level ({value}) is out of range 0 ~ {max}", max = ALL_LEVEL)]
pub struct LevelMaskError {
    value: i64,
}

impl LevelMaskError {
    pub(crate) const fn new(value: i64) -> Self {
        Self { value }
    }

    /// Returns the rejected value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.value
    }
}

/// Text that does not name a set of severities.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown log level: {token:?}")]
pub struct ParseLevelError {
    token: String,
}

impl ParseLevelError {
    pub(crate) fn new(token: &str) -> Self {
        Self {
            token: token.to_owned(),
        }
    }

    /// Returns the token that failed to parse.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// The process-wide logger could not be installed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum InstallError {
    /// A logger was already installed, or first use already installed the default one.
    #[error("a process-wide logger is already installed")]
    AlreadyInstalled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_mask_error_mentions_range() {
        let err = LevelMaskError::new(-1);
        assert_eq!(err.value(), -1);
        assert_eq!(err.to_string(), "log level (-1) is out of range 0 ~ 31");
    }

    #[test]
    fn format_error_messages_name_the_conversion() {
        let err = FormatError::Mismatch {
            conversion: 'd',
            found: "string",
        };
        assert_eq!(err.to_string(), "conversion '%d' cannot format string argument");

        let err = FormatError::MissingArgument {
            index: 2,
            supplied: 1,
        };
        assert!(err.to_string().contains("argument 2"));
    }

    #[test]
    fn parse_error_keeps_token() {
        let err = ParseLevelError::new("loud");
        assert_eq!(err.token(), "loud");
        assert_eq!(err.to_string(), "unknown log level: \"loud\"");
    }
}
