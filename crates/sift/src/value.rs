//! Runtime field values read from caller records.
//!
//! The engine never knows the shape of an item. It asks an accessor for a
//! named field and receives a [`Value`], which is either something it can
//! score and order (strings and numbers) or something it ignores.

use std::cmp::Ordering;
use std::fmt;

/// A field value borrowed from an item.
///
/// # Example
///
/// ```
/// use sift::{Number, Value};
///
/// struct Device {
///     hostname: String,
///     port: u16,
/// }
///
/// fn accessor<'a>(device: &'a Device, field: &str) -> Value<'a> {
///     match field {
///         "hostname" => Value::String(&device.hostname),
///         "port" => Value::Number(Number::from(device.port)),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Numeric value.
    Number(Number),
    /// Boolean value. Readable, but neither scored nor ordered.
    Bool(bool),
    /// Field missing, null, or of a type the engine does not understand.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Returns `true` if this is a `String` value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if this is a `Number` value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the search stage can score this value.
    pub fn is_scorable(&self) -> bool {
        self.is_string() || self.is_number()
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::String(s)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Number>> From<Option<T>> for Value<'_> {
    fn from(n: Option<T>) -> Self {
        match n {
            Some(n) => Value::Number(n.into()),
            None => Value::None,
        }
    }
}

/// Numeric value supporting all common numeric types.
///
/// Integers keep their exact representation; comparisons across variants
/// fall back to `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64 for comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers, handling mixed types.
    ///
    /// Returns `None` when either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }

    /// Decimal rendering used for search matching.
    ///
    /// Whole floats render without a fractional part, so `2.0` becomes `"2"`
    /// and matches the same queries as the integer `2`.
    pub fn to_decimal_string(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{n}"),
            Number::U64(n) => write!(f, "{n}"),
            // f64's Display already drops a trailing ".0"
            Number::F64(n) => write!(f, "{n}"),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

macro_rules! number_from {
    ($variant:ident, $target:ty, $($ty:ty),+) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number::$variant(n as $target)
                }
            }
        )+
    };
}

number_from!(I64, i64, i8, i16, i32, i64, isize);
number_from!(U64, u64, u8, u16, u32, u64, usize);
number_from!(F64, f64, f32, f64);
