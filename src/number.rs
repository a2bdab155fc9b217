//! Numeric operands with integer/float promotion.

use serde_json::Value;
use std::fmt;
use std::ops::Add;

/// A JSON number, kept as an integer when the literal was one.
///
/// Integer literals are parsed from their source text into `i128`, so values
/// beyond 64 bits stay integers. Only literals past the `i128` range fall
/// back to `Float`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i128),
    Float(f64),
}

impl Number {
    /// Convert a JSON value, returning `None` for anything that is not a number.
    pub fn from_json(value: &Value) -> Option<Self> {
        let Value::Number(n) = value else {
            return None;
        };

        // arbitrary_precision keeps the literal text intact
        let literal = n.to_string();
        if !literal.contains(['.', 'e', 'E']) {
            if let Ok(i) = literal.parse::<i128>() {
                return Some(Self::Int(i));
            }
        }
        literal.parse::<f64>().ok().map(Self::Float)
    }

    #[allow(clippy::cast_precision_loss)]
    fn to_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => match a.checked_add(b) {
                Some(sum) => Self::Int(sum),
                None => Self::Float(self.to_f64() + rhs.to_f64()),
            },
            (a, b) => Self::Float(a.to_f64() + b.to_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            // Debug keeps the fractional part: 1.0 rather than 1
            Self::Float(x) => write!(f, "{x:?}"),
        }
    }
}
