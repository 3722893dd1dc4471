use thiserror::Error;

use crate::api::FromValue;
use crate::model::{Kind, Literal};

/// Behaviour to convert a Cli token into a typed scalar `T`.
///
/// Each implementation pairs the type with its [`Kind`] (the tag stored in a descriptor), and with the literal type used to declare its defaults.
pub trait Scalar: FromValue + Sized {
    /// The kind tag of this type.
    const KIND: Kind;

    /// The type used to declare defaults for this scalar (`&'static str` for `String`, otherwise `Self`).
    type Literal;

    /// Convert a token into this type.
    /// Never panics; all failures are reported as an [`InvalidConversion`].
    fn convert(token: &str) -> Result<Self, InvalidConversion>;

    /// Wrap a declared default.
    fn literal(literal: Self::Literal) -> Literal;
}

/// The diagnostic for a token which failed to convert.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidConversion {
    /// An empty token given to a string.
    #[error("empty string value not allowed.")]
    EmptyString,

    /// An empty (or all whitespace) token given to a number.
    #[error("empty input for {type_name}.")]
    Empty {
        /// The target type.
        type_name: &'static str,
    },

    /// A token which is not precisely one character.
    #[error("'{token}' is not a valid character.")]
    Character {
        /// The offending token.
        token: String,
    },

    /// A negative token given to an unsigned integer.
    #[error("'{token}' negative value not allowed for {type_name}.")]
    Negative {
        /// The offending token.
        token: String,
        /// The target type.
        type_name: &'static str,
    },

    /// A token which does not scan as the target type.
    #[error("'{token}' is not a valid {type_name}.")]
    Malformed {
        /// The offending token.
        token: String,
        /// The target type.
        type_name: &'static str,
    },

    /// A token which scans, but does not fit in the target type.
    #[error("'{token}' is out of range for {type_name}.")]
    OutOfRange {
        /// The offending token.
        token: String,
        /// The target type.
        type_name: &'static str,
    },
}

// The whitespace skipped by `isspace`; notice this includes the vertical tab.
fn skip_leading(token: &str) -> &str {
    token.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b')
}

#[derive(Debug, PartialEq, Eq)]
enum ScanError {
    Malformed,
    Overflow,
}

impl ScanError {
    fn describe(self, text: &str, type_name: &'static str) -> InvalidConversion {
        match self {
            ScanError::Malformed => InvalidConversion::Malformed {
                token: text.to_string(),
                type_name,
            },
            ScanError::Overflow => InvalidConversion::OutOfRange {
                token: text.to_string(),
                type_name,
            },
        }
    }
}

/// Scan a base-detecting integer: `0x`/`0X` is hexadecimal, a leading `0` is octal, otherwise decimal.
/// Returns the sign and magnitude.
fn scan_integer(text: &str) -> Result<(bool, u128), ScanError> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (radix, digits) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hexadecimal) => (16, hexadecimal),
        None if unsigned.len() > 1 && unsigned.starts_with('0') => (8, &unsigned[1..]),
        None => (10, unsigned),
    };

    // `from_str_radix` tolerates a sign, which must not appear after the prefix.
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(ScanError::Malformed);
    }

    // With the digits validated, the only remaining failure is overflow.
    u128::from_str_radix(digits, radix)
        .map(|magnitude| (negative, magnitude))
        .map_err(|_| ScanError::Overflow)
}

macro_rules! unsigned_scalar {
    ($($t:ty => $kind:ident),* $(,)?) => {
        $(
            impl Scalar for $t {
                const KIND: Kind = Kind::$kind;
                type Literal = $t;

                fn convert(token: &str) -> Result<Self, InvalidConversion> {
                    let type_name = Self::KIND.name();
                    let text = skip_leading(token);

                    if text.is_empty() {
                        return Err(InvalidConversion::Empty { type_name });
                    }

                    // Reject rather than wrap around.
                    if text.starts_with('-') {
                        return Err(InvalidConversion::Negative {
                            token: text.to_string(),
                            type_name,
                        });
                    }

                    let (_, magnitude) =
                        scan_integer(text).map_err(|e| e.describe(text, type_name))?;
                    <$t>::try_from(magnitude).map_err(|_| InvalidConversion::OutOfRange {
                        token: text.to_string(),
                        type_name,
                    })
                }

                fn literal(literal: Self::Literal) -> Literal {
                    Literal::$kind(literal)
                }
            }
        )*
    };
}

macro_rules! signed_scalar {
    ($($t:ty => $kind:ident),* $(,)?) => {
        $(
            impl Scalar for $t {
                const KIND: Kind = Kind::$kind;
                type Literal = $t;

                fn convert(token: &str) -> Result<Self, InvalidConversion> {
                    let type_name = Self::KIND.name();
                    let text = skip_leading(token);

                    if text.is_empty() {
                        return Err(InvalidConversion::Empty { type_name });
                    }

                    let out_of_range = || InvalidConversion::OutOfRange {
                        token: text.to_string(),
                        type_name,
                    };
                    let (negative, magnitude) =
                        scan_integer(text).map_err(|e| e.describe(text, type_name))?;
                    let signed = i128::try_from(magnitude).map_err(|_| out_of_range())?;
                    let signed = if negative { -signed } else { signed };
                    <$t>::try_from(signed).map_err(|_| out_of_range())
                }

                fn literal(literal: Self::Literal) -> Literal {
                    Literal::$kind(literal)
                }
            }
        )*
    };
}

macro_rules! float_scalar {
    ($($t:ty => $kind:ident),* $(,)?) => {
        $(
            impl Scalar for $t {
                const KIND: Kind = Kind::$kind;
                type Literal = $t;

                fn convert(token: &str) -> Result<Self, InvalidConversion> {
                    let type_name = Self::KIND.name();
                    let text = skip_leading(token);

                    if text.is_empty() {
                        return Err(InvalidConversion::Empty { type_name });
                    }

                    let value = text.parse::<$t>().map_err(|_| InvalidConversion::Malformed {
                        token: text.to_string(),
                        type_name,
                    })?;

                    if (value.is_infinite() && !is_infinity(text))
                        || (value == 0.0 && has_significant_digit(text))
                    {
                        return Err(InvalidConversion::OutOfRange {
                            token: text.to_string(),
                            type_name,
                        });
                    }

                    Ok(value)
                }

                fn literal(literal: Self::Literal) -> Literal {
                    Literal::$kind(literal)
                }
            }
        )*
    };
}

unsigned_scalar!(u8 => U8, u16 => U16, u32 => U32, u64 => U64, usize => Usize);
signed_scalar!(i8 => I8, i16 => I16, i32 => I32, i64 => I64, isize => Isize);
float_scalar!(f32 => F32, f64 => F64);

fn is_infinity(text: &str) -> bool {
    let unsigned = text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

// Whether the mantissa is non-zero (so a zero result means the literal underflowed).
fn has_significant_digit(text: &str) -> bool {
    text.chars()
        .take_while(|c| *c != 'e' && *c != 'E')
        .any(|c| matches!(c, '1'..='9'))
}

impl Scalar for char {
    const KIND: Kind = Kind::Char;
    type Literal = char;

    fn convert(token: &str) -> Result<Self, InvalidConversion> {
        let mut characters = token.chars();

        match (characters.next(), characters.next()) {
            (Some(character), None) => Ok(character),
            _ => Err(InvalidConversion::Character {
                token: token.to_string(),
            }),
        }
    }

    fn literal(literal: Self::Literal) -> Literal {
        Literal::Char(literal)
    }
}

impl Scalar for String {
    const KIND: Kind = Kind::Str;
    type Literal = &'static str;

    fn convert(token: &str) -> Result<Self, InvalidConversion> {
        if token.is_empty() {
            Err(InvalidConversion::EmptyString)
        } else {
            Ok(token.to_string())
        }
    }

    fn literal(literal: Self::Literal) -> Literal {
        Literal::Str(literal)
    }
}
