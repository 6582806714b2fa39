//! crates/logging/src/format.rs
//! printf-style formatting over a slice of typed arguments.
//!
//! The grammar of a specifier is
//! `%[index$][flags][width][.precision]conversion`:
//!
//! | conversion | accepts | output |
//! |------------|---------|--------|
//! | `s` `S` | anything | `Display` text, `S` upper-cased |
//! | `d` | integers | decimal |
//! | `x` `X` `o` | integers | hex / octal, negatives as 64-bit two's complement |
//! | `f` `e` `E` | floats | fixed / scientific, default precision 6; `NaN` and `Infinity` spelled out |
//! | `c` `C` | chars, integer code points | the character |
//! | `b` `B` | anything | `true`/`false`; null is `false`, non-bools are `true` |
//! | `%` | nothing | a literal `%`, padded to the width |
//! | `n` | nothing | a newline |
//!
//! Flags:
//!
//! | flag | meaning | conversions |
//! |------|---------|-------------|
//! | `-` | left-justify | all |
//! | `0` | zero-pad after the sign or radix prefix | numbers |
//! | `+` | always print the sign | `d` `f` `e` |
//! | ` ` | leading space for non-negative values | `d` `f` `e` |
//! | `,` | group integer digits by thousands | `d` `f` |
//! | `#` | `0x`/`0` prefix, or a forced decimal point | `x` `o` `f` `e` |
//!
//! A flag outside its conversions is a [`FormatError::FlagMismatch`]. A null
//! argument renders as `null` for every conversion except `b`. Surplus
//! arguments are ignored.
//!
//! Arguments carry no width of their own: every integer is widened to 64
//! bits first, so `%x` of `-1i32` prints sixteen `f`s, not eight. Grouping
//! always uses `,` and scientific notation always uses `e`, whatever the
//! locale.

use std::borrow::Cow;
use std::fmt;

use crate::error::FormatError;

/// One argument to a formatted log call.
///
/// Arguments are built with `From` conversions, so call sites rarely name the
/// variants:
///
/// ```
/// use logging::{Arg, format};
///
/// let text = format("%s=%d (%.1f%%)", &["load".into(), 3.into(), 42.26.into()]).unwrap();
/// assert_eq!(text, "load=3 (42.3%)");
///
/// let absent: Option<&str> = None;
/// assert_eq!(format("%s", &[Arg::from(absent)]).unwrap(), "null");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Arg<'a> {
    /// An absent value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A single character.
    Char(char),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    UInt(u64),
    /// A floating-point number.
    Float(f64),
    /// Text.
    Str(Cow<'a, str>),
}

impl Arg<'_> {
    /// Captures any displayable value as text.
    pub fn display(value: impl fmt::Display) -> Self {
        Arg::Str(Cow::Owned(value.to_string()))
    }

    /// Short description of the argument's kind, used in [`FormatError::Mismatch`].
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Char(_) => "char",
            Self::Int(_) | Self::UInt(_) => "integer",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
        }
    }
}

impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => v.fmt(f),
            Self::Char(v) => v.fmt(f),
            Self::Int(v) => v.fmt(f),
            Self::UInt(v) => v.fmt(f),
            Self::Float(v) => v.fmt(f),
            Self::Str(v) => f.write_str(v),
        }
    }
}

macro_rules! arg_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Arg<'_> {
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

arg_from!(Int as i64: i8, i16, i32, i64);
arg_from!(UInt as u64: u8, u16, u32, u64);
arg_from!(Float as f64: f32, f64);

impl From<isize> for Arg<'_> {
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<usize> for Arg<'_> {
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

impl From<bool> for Arg<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for Arg<'_> {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(value: &'a String) -> Self {
        Self::Str(Cow::Borrowed(value))
    }
}

impl From<String> for Arg<'_> {
    fn from(value: String) -> Self {
        Self::Str(Cow::Owned(value))
    }
}

impl<'a, T> From<Option<T>> for Arg<'a>
where
    T: Into<Arg<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Applies `template` to `args`.
///
/// ```
/// use logging::format;
///
/// assert_eq!(format("%s=%d", &["x".into(), 5.into()]).unwrap(), "x=5");
/// assert_eq!(format("%2$s %1$s", &["world".into(), "hello".into()]).unwrap(), "hello world");
/// assert!(format("%d", &["five".into()]).is_err());
/// ```
pub fn format(template: &str, args: &[Arg<'_>]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut ordinary = 0usize;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let (spec, consumed) = Spec::parse(&rest[pos + 1..])?;
        rest = &rest[pos + 1 + consumed..];

        match spec.conversion {
            '%' => spec.pad(Rendered::text("%"), &mut out),
            'n' => out.push('\n'),
            _ => {
                let index = spec.index.unwrap_or_else(|| {
                    ordinary += 1;
                    ordinary
                });
                let arg = args.get(index - 1).ok_or(FormatError::MissingArgument {
                    index,
                    supplied: args.len(),
                })?;
                spec.render(arg, &mut out)?;
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}

/// Every conversion character the formatter understands.
const CONVERSIONS: &str = "sSbBcCdxXofeE%n";

#[derive(Clone, Copy, Debug, Default)]
struct Flags {
    left: bool,
    zero: bool,
    plus: bool,
    space: bool,
    group: bool,
    alternate: bool,
}

impl Flags {
    /// The flags set, paired with their characters.
    fn set(self) -> impl Iterator<Item = char> {
        [
            (self.zero, '0'),
            (self.plus, '+'),
            (self.space, ' '),
            (self.group, ','),
            (self.alternate, '#'),
        ]
        .into_iter()
        .filter_map(|(on, flag)| on.then_some(flag))
    }
}

#[derive(Clone, Copy, Debug)]
struct Spec {
    index: Option<usize>,
    flags: Flags,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: char,
}

/// Result of rendering one argument before padding.
struct Rendered {
    text: String,
    numeric: bool,
    // Zero fill goes after this many leading bytes (a sign or a radix prefix).
    prefix: usize,
}

impl Rendered {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            numeric: false,
            prefix: 0,
        }
    }

    fn number(prefix: &str, digits: &str) -> Self {
        Self {
            text: format!("{prefix}{digits}"),
            numeric: true,
            prefix: prefix.len(),
        }
    }
}

fn leading_digits(bytes: &[u8], from: usize) -> usize {
    bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count()
}

fn parse_number(digits: &str) -> Result<usize, FormatError> {
    digits.parse().map_err(|_| FormatError::WidthOverflow)
}

impl Spec {
    /// Parses the specifier following a `%`, returning it with the number of
    /// bytes consumed.
    fn parse(s: &str) -> Result<(Self, usize), FormatError> {
        let bytes = s.as_bytes();
        let mut i = 0;

        let mut index = None;
        let digits = leading_digits(bytes, 0);
        if digits > 0 && bytes.get(digits) == Some(&b'$') {
            let n = parse_number(&s[..digits])?;
            if n == 0 {
                return Err(FormatError::InvalidIndex);
            }
            index = Some(n);
            i = digits + 1;
        }

        let mut flags = Flags::default();
        while let Some(&b) = bytes.get(i) {
            match b {
                b'-' => flags.left = true,
                b'0' => flags.zero = true,
                b'+' => flags.plus = true,
                b' ' => flags.space = true,
                b',' => flags.group = true,
                b'#' => flags.alternate = true,
                _ => break,
            }
            i += 1;
        }

        let digits = leading_digits(bytes, i);
        let width = if digits > 0 {
            Some(parse_number(&s[i..i + digits])?)
        } else {
            None
        };
        i += digits;

        let mut precision = None;
        if bytes.get(i) == Some(&b'.') {
            i += 1;
            let digits = leading_digits(bytes, i);
            precision = Some(if digits > 0 {
                parse_number(&s[i..i + digits])?
            } else {
                0
            });
            i += digits;
        }

        let conversion = s[i..].chars().next().ok_or(FormatError::Incomplete)?;
        if !CONVERSIONS.contains(conversion) {
            return Err(FormatError::UnknownConversion(conversion));
        }
        let spec = Self {
            index,
            flags,
            width,
            precision,
            conversion,
        };
        spec.check_flags()?;
        Ok((spec, i + conversion.len_utf8()))
    }

    /// Rejects flags that do not apply to the conversion.
    fn check_flags(&self) -> Result<(), FormatError> {
        let allowed: &str = match self.conversion {
            's' | 'S' | 'b' | 'B' | 'c' | 'C' | '%' | 'n' => "",
            'd' => "0+ ,",
            'x' | 'X' | 'o' => "0#",
            'f' => "0+ ,#",
            _ => "0+ #",
        };
        match self.flags.set().find(|flag| !allowed.contains(*flag)) {
            Some(flag) => Err(FormatError::FlagMismatch {
                flag,
                conversion: self.conversion,
            }),
            None => Ok(()),
        }
    }

    fn mismatch(&self, arg: &Arg<'_>) -> FormatError {
        FormatError::Mismatch {
            conversion: self.conversion,
            found: arg.kind(),
        }
    }

    fn render(&self, arg: &Arg<'_>, out: &mut String) -> Result<(), FormatError> {
        let conversion = self.conversion;
        let rendered = match conversion {
            's' | 'S' | 'b' | 'B' | 'c' | 'C' => {
                let text = match conversion.to_ascii_lowercase() {
                    's' => arg.to_string(),
                    'b' => match arg {
                        Arg::Null => "false".to_owned(),
                        Arg::Bool(v) => v.to_string(),
                        _ => "true".to_owned(),
                    },
                    _ => match arg {
                        Arg::Char(c) => c.to_string(),
                        Arg::Int(v) => code_point(i128::from(*v))?.to_string(),
                        Arg::UInt(v) => code_point(i128::from(*v))?.to_string(),
                        Arg::Null => "null".to_owned(),
                        other => return Err(self.mismatch(other)),
                    },
                };
                Rendered::text(self.truncate(text))
            }
            'd' => match arg {
                Arg::Int(v) => self.signed(*v < 0, &self.grouped(v.unsigned_abs().to_string())),
                Arg::UInt(v) => self.signed(false, &self.grouped(v.to_string())),
                Arg::Null => Rendered::text("null"),
                other => return Err(self.mismatch(other)),
            },
            'x' | 'X' | 'o' => match arg {
                Arg::Int(v) => self.radix(*v as u64),
                Arg::UInt(v) => self.radix(*v),
                Arg::Null => Rendered::text("null"),
                other => return Err(self.mismatch(other)),
            },
            'f' | 'e' | 'E' => match arg {
                Arg::Float(v) if v.is_nan() => Rendered::text("NaN"),
                Arg::Float(v) if v.is_infinite() => {
                    let Rendered { text, .. } = self.signed(*v < 0.0, "Infinity");
                    Rendered::text(text)
                }
                Arg::Float(v) => {
                    let precision = self.precision.unwrap_or(6);
                    let magnitude = v.abs();
                    let mut digits = if conversion == 'f' {
                        self.grouped(format!("{magnitude:.precision$}"))
                    } else {
                        scientific(magnitude, precision)
                    };
                    if self.flags.alternate && precision == 0 {
                        digits = match digits.split_once('e') {
                            Some((mantissa, exponent)) => format!("{mantissa}.e{exponent}"),
                            None => digits + ".",
                        };
                    }
                    self.signed(v.is_sign_negative(), &digits)
                }
                Arg::Null => Rendered::text("null"),
                other => return Err(self.mismatch(other)),
            },
            other => return Err(FormatError::UnknownConversion(other)),
        };

        let rendered = if conversion.is_ascii_uppercase() {
            Rendered {
                text: rendered.text.to_uppercase(),
                ..rendered
            }
        } else {
            rendered
        };
        self.pad(rendered, out);
        Ok(())
    }

    fn truncate(&self, text: String) -> String {
        match self.precision {
            Some(precision) => text.chars().take(precision).collect(),
            None => text,
        }
    }

    fn signed(&self, negative: bool, digits: &str) -> Rendered {
        let sign = if negative {
            "-"
        } else if self.flags.plus {
            "+"
        } else if self.flags.space {
            " "
        } else {
            ""
        };
        Rendered::number(sign, digits)
    }

    fn radix(&self, value: u64) -> Rendered {
        let (prefix, digits) = if self.conversion == 'o' {
            ("0", format!("{value:o}"))
        } else {
            ("0x", format!("{value:x}"))
        };
        if self.flags.alternate {
            Rendered::number(prefix, &digits)
        } else {
            Rendered::number("", &digits)
        }
    }

    /// Inserts `,` every three digits of the integer part when the flag is set.
    fn grouped(&self, digits: String) -> String {
        if !self.flags.group {
            return digits;
        }
        let (integer, fraction) = match digits.find('.') {
            Some(dot) => digits.split_at(dot),
            None => (digits.as_str(), ""),
        };
        let mut out = String::with_capacity(digits.len() + integer.len() / 3);
        for (i, c) in integer.chars().enumerate() {
            if i > 0 && (integer.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        out.push_str(fraction);
        out
    }

    fn pad(&self, rendered: Rendered, out: &mut String) {
        let Rendered {
            text,
            numeric,
            prefix,
        } = rendered;
        let len = text.chars().count();
        let fill = self.width.unwrap_or(0).saturating_sub(len);
        if fill == 0 {
            out.push_str(&text);
        } else if self.flags.left {
            out.push_str(&text);
            out.extend(std::iter::repeat_n(' ', fill));
        } else if self.flags.zero && numeric {
            out.push_str(&text[..prefix]);
            out.extend(std::iter::repeat_n('0', fill));
            out.push_str(&text[prefix..]);
        } else {
            out.extend(std::iter::repeat_n(' ', fill));
            out.push_str(&text);
        }
    }
}

fn code_point(value: i128) -> Result<char, FormatError> {
    u32::try_from(value)
        .ok()
        .and_then(char::from_u32)
        .ok_or(FormatError::InvalidCodePoint(value))
}

/// C-style scientific notation: `1.500000e+02`.
fn scientific(value: f64, precision: usize) -> String {
    let raw = format!("{value:.precision$e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
        }
        None => raw,
    }
}
