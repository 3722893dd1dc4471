use crate::api::InvalidConversion;
use crate::api::Scalar;

/// The scalar type of an argument/option.
///
/// The kind doubles as the converter selector: [`Kind::convert`] dispatches to the [`Scalar::convert`] of the matching type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `isize`
    Isize,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `usize`
    Usize,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// `char`
    Char,
    /// `String`
    Str,
}

impl Kind {
    /// The type name used in diagnostics.
    pub const fn name(&self) -> &'static str {
        match self {
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::Isize => "isize",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::Usize => "usize",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::Char => "char",
            Kind::Str => "String",
        }
    }

    /// The zero value of this kind.
    /// Used as the placeholder for required arguments before parsing.
    pub fn zero(&self) -> Value {
        match self {
            Kind::I8 => Value::I8(0),
            Kind::I16 => Value::I16(0),
            Kind::I32 => Value::I32(0),
            Kind::I64 => Value::I64(0),
            Kind::Isize => Value::Isize(0),
            Kind::U8 => Value::U8(0),
            Kind::U16 => Value::U16(0),
            Kind::U32 => Value::U32(0),
            Kind::U64 => Value::U64(0),
            Kind::Usize => Value::Usize(0),
            Kind::F32 => Value::F32(0.0),
            Kind::F64 => Value::F64(0.0),
            Kind::Char => Value::Char('\0'),
            Kind::Str => Value::Str(String::default()),
        }
    }

    /// Convert the `token` into a [`Value`] of this kind.
    pub fn convert(&self, token: &str) -> Result<Value, InvalidConversion> {
        Ok(match self {
            Kind::I8 => Value::I8(i8::convert(token)?),
            Kind::I16 => Value::I16(i16::convert(token)?),
            Kind::I32 => Value::I32(i32::convert(token)?),
            Kind::I64 => Value::I64(i64::convert(token)?),
            Kind::Isize => Value::Isize(isize::convert(token)?),
            Kind::U8 => Value::U8(u8::convert(token)?),
            Kind::U16 => Value::U16(u16::convert(token)?),
            Kind::U32 => Value::U32(u32::convert(token)?),
            Kind::U64 => Value::U64(u64::convert(token)?),
            Kind::Usize => Value::Usize(usize::convert(token)?),
            Kind::F32 => Value::F32(f32::convert(token)?),
            Kind::F64 => Value::F64(f64::convert(token)?),
            Kind::Char => Value::Char(char::convert(token)?),
            Kind::Str => Value::Str(String::convert(token)?),
        })
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A typed value held by [`Values`](./struct.Values.html).
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum Value {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Char(char),
    Str(String),
    /// The value of a boolean switch.
    Bool(bool),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::I8(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::Isize(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "{v}"),
            Value::U16(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::Usize(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::Char(v) => write!(f, "{v}"),
            Value::Str(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
        }
    }
}

/// The declared default of an option.
///
/// Unlike [`Value`], a literal is `Copy` (strings are `&'static str`) so that declarations may live in a `const` table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(missing_docs)]
pub enum Literal {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Char(char),
    Str(&'static str),
}

impl Literal {
    /// The kind of this literal.
    pub const fn kind(&self) -> Kind {
        match self {
            Literal::I8(_) => Kind::I8,
            Literal::I16(_) => Kind::I16,
            Literal::I32(_) => Kind::I32,
            Literal::I64(_) => Kind::I64,
            Literal::Isize(_) => Kind::Isize,
            Literal::U8(_) => Kind::U8,
            Literal::U16(_) => Kind::U16,
            Literal::U32(_) => Kind::U32,
            Literal::U64(_) => Kind::U64,
            Literal::Usize(_) => Kind::Usize,
            Literal::F32(_) => Kind::F32,
            Literal::F64(_) => Kind::F64,
            Literal::Char(_) => Kind::Char,
            Literal::Str(_) => Kind::Str,
        }
    }

    /// Render this literal under the given `format`.
    pub fn render(&self, format: Format) -> String {
        match (format, self) {
            (Format::General { precision }, Literal::F32(v)) => {
                format_general(*v as f64, precision as usize)
            }
            (Format::General { precision }, Literal::F64(v)) => {
                format_general(*v, precision as usize)
            }
            _ => self.to_string(),
        }
    }
}

impl From<Literal> for Value {
    fn from(value: Literal) -> Self {
        match value {
            Literal::I8(v) => Value::I8(v),
            Literal::I16(v) => Value::I16(v),
            Literal::I32(v) => Value::I32(v),
            Literal::I64(v) => Value::I64(v),
            Literal::Isize(v) => Value::Isize(v),
            Literal::U8(v) => Value::U8(v),
            Literal::U16(v) => Value::U16(v),
            Literal::U32(v) => Value::U32(v),
            Literal::U64(v) => Value::U64(v),
            Literal::Usize(v) => Value::Usize(v),
            Literal::F32(v) => Value::F32(v),
            Literal::F64(v) => Value::F64(v),
            Literal::Char(v) => Value::Char(v),
            Literal::Str(v) => Value::Str(v.to_string()),
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Value::from(*self))
    }
}

/// How an option's default is rendered in the help message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Plain [`std::fmt::Display`].
    #[default]
    Display,
    /// Shortest of fixed/scientific notation with `precision` significant digits, like printf's `%.<precision>g`.
    /// Only applies to floating point defaults.
    General {
        /// Number of significant digits.
        precision: u8,
    },
}

pub(crate) fn format_general(value: f64, precision: usize) -> String {
    // A precision of 0 is treated as 1.
    let precision = std::cmp::max(precision, 1);

    if value.is_nan() {
        return "nan".to_string();
    }

    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{m}e{sign}{e:02}",
            m = trim_fraction(mantissa),
            e = exponent.abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
