//! Owned filter operands.
//!
//! The [`Value`] enum is the right-hand side of a [`Filter`]: any
//! comparable value a persistence adapter may need to bind. Unlike a
//! runtime field value it owns its data, so criteria can be stored, cloned
//! and shared freely.
//!
//! [`Filter`]: crate::Filter

use std::fmt;
use std::hash::{Hash, Hasher};

/// Comparison operand stored in a filter.
///
/// Equality is structural. `Value` deliberately does not implement
/// [`Hash`]: floats have no stable structural hash, so [`Filter`] falls back
/// to hashing the display form when a value contains one (see
/// [`Value::has_stable_hash`]).
///
/// The `Debug` output is the quoted repr form (`'text'`, `[1, 2]`), which
/// is what filter debug output embeds.
///
/// [`Filter`]: crate::Filter
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Absent value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(Number),
    /// String value.
    String(String),
    /// Sequence of values, as used by `in` and `not in`.
    List(Vec<Value>),
}

// NaN floats compare unequal to themselves, as in every other float
// container; everything else is reflexive.
impl Eq for Value {}

impl Value {
    /// Returns `true` if this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if this is a `List`.
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&str> {
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

    /// Extracts the list items, if present.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns `true` if the value can be hashed structurally.
    ///
    /// Floats, directly or nested in a list, cannot.
    pub fn has_stable_hash(&self) -> bool {
        match self {
            Value::Number(Number::F64(_)) => false,
            Value::List(items) => items.iter().all(Value::has_stable_hash),
            _ => true,
        }
    }

    /// Feeds the structural hash of this value into `state`.
    ///
    /// Only meaningful when [`has_stable_hash`](Self::has_stable_hash) holds.
    pub(crate) fn hash_structural<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Number(n) => {
                let n = n.canonical();
                std::mem::discriminant(&n).hash(state);
                match n {
                    Number::I64(v) => v.hash(state),
                    Number::U64(v) => v.hash(state),
                    Number::F64(v) => v.to_bits().hash(state),
                }
            }
            Value::String(s) => s.hash(state),
            Value::List(items) => {
                items.len().hash(state);
                for item in items {
                    item.hash_structural(state);
                }
            }
        }
    }

    /// Feeds the display form of this value into `state`, with `-0.0`
    /// written as `0.0` so that equal values hash equally.
    pub(crate) fn hash_display<H: Hasher>(&self, state: &mut H) {
        self.without_negative_zero().to_string().hash(state);
    }

    fn without_negative_zero(&self) -> Value {
        match self {
            Value::Number(Number::F64(v)) if *v == 0.0 => Value::Number(Number::F64(0.0)),
            Value::List(items) => {
                Value::List(items.iter().map(Value::without_negative_zero).collect())
            }
            other => other.clone(),
        }
    }

    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "'{}'", s.replace('\'', "\\'")),
            Value::List(items) => fmt_list(items, f),
            other => fmt::Display::fmt(other, f),
        }
    }
}

fn fmt_list(items: &[Value], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        item.fmt_repr(f)?;
    }
    f.write_str("]")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
            Value::List(items) => fmt_list(items, f),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_repr(f)
    }
}

/// Numeric value supporting all common numeric types.
///
/// Numbers are stored in one of three variants to preserve precision:
/// - `I64` for integers that fit in `i64`
/// - `U64` for unsigned integers above `i64::MAX`
/// - `F64` for floating point
///
/// Conversions pick the variant, so `18u32` and `18i32` both become
/// `I64(18)`. Equality compares integers by value whichever variant holds
/// them; an integer never equals a float.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Builds an integer number, using `I64` whenever `n` fits.
    pub fn from_u64(n: u64) -> Number {
        i64::try_from(n).map_or(Number::U64(n), Number::I64)
    }

    /// Returns the same number with integers in their canonical variant.
    pub fn canonical(self) -> Number {
        match self {
            Number::U64(n) => Number::from_u64(n),
            other => other,
        }
    }

    /// Converts the number to f64.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Number) -> bool {
        match (self.canonical(), other.canonical()) {
            (Number::I64(a), Number::I64(b)) => a == b,
            (Number::U64(a), Number::U64(b)) => a == b,
            (Number::F64(a), Number::F64(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{n}"),
            Number::U64(n) => write!(f, "{n}"),
            // Debug keeps the fractional part: 2.0 rather than 2.
            Number::F64(n) => write!(f, "{n:?}"),
        }
    }
}

macro_rules! number_from {
    ($ctor:ident as $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for Number {
                fn from(n: $source) -> Self {
                    Number::$ctor(n as $target)
                }
            }

            impl From<$source> for Value {
                fn from(n: $source) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

number_from!(I64 as i64: i8, i16, i32, i64, isize);
number_from!(from_u64 as u64: u8, u16, u32, u64, usize);
number_from!(F64 as f64: f32, f64);

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(v: &[T]) -> Self {
        Value::List(v.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn structural(v: &Value) -> u64 {
        let mut hasher = DefaultHasher::new();
        v.hash_structural(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn conversions() {
        assert_eq!(Value::from(18), Value::Number(Number::I64(18)));
        assert_eq!(Value::from(18u8), Value::Number(Number::I64(18)));
        assert!(matches!(Value::from(18usize), Value::Number(Number::I64(18))));
        assert!(matches!(
            Value::from(u64::MAX),
            Value::Number(Number::U64(u64::MAX))
        ));
        assert_eq!(Value::from(1.5), Value::Number(Number::F64(1.5)));
        assert_eq!(Value::from("active"), Value::String("active".into()));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::String("x".into()));
        assert_eq!(
            Value::from(vec!["a", "b"]),
            Value::List(vec![Value::from("a"), Value::from("b")])
        );
        assert_eq!(Value::from([1, 2]), Value::from(vec![1, 2]));
    }

    #[test]
    fn display_forms() {
        assert_eq!(Value::from("active").to_string(), "active");
        assert_eq!(Value::from(18).to_string(), "18");
        assert_eq!(Value::from(2.0).to_string(), "2.0");
        assert_eq!(Value::from(false).to_string(), "false");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from(vec!["a", "b"]).to_string(), "['a', 'b']");
        assert_eq!(Value::from(vec![1, 2, 3]).to_string(), "[1, 2, 3]");
    }

    #[test]
    fn repr_forms() {
        assert_eq!(format!("{:?}", Value::from("active")), "'active'");
        assert_eq!(format!("{:?}", Value::from("it's")), "'it\\'s'");
        assert_eq!(format!("{:?}", Value::from(7)), "7");
        assert_eq!(format!("{:?}", Value::from(vec!["a"])), "['a']");
    }

    #[test]
    fn stable_hash_detection() {
        assert!(Value::from(1).has_stable_hash());
        assert!(Value::from("x").has_stable_hash());
        assert!(Value::Null.has_stable_hash());
        assert!(Value::from(vec![1, 2]).has_stable_hash());
        assert!(!Value::from(1.5).has_stable_hash());
        assert!(!Value::List(vec![Value::from(1), Value::from(0.5)]).has_stable_hash());
    }

    #[test]
    fn structural_hash_distinguishes_variants() {
        assert_eq!(structural(&Value::from(1)), structural(&Value::from(1)));
        assert_ne!(structural(&Value::from(1)), structural(&Value::from(1.0)));
        assert_ne!(structural(&Value::from("1")), structural(&Value::from(1)));
        assert_ne!(
            structural(&Value::from(vec![1, 2])),
            structural(&Value::from(vec![2, 1]))
        );
    }

    #[test]
    fn integers_compare_by_value_across_widths() {
        let signed = Value::from(18);
        for other in [
            Value::from(18u8),
            Value::from(18u32),
            Value::from(18usize),
            Value::from(18i64),
            Value::Number(Number::U64(18)),
        ] {
            assert_eq!(signed, other);
            assert_eq!(structural(&signed), structural(&other));
        }
        assert_ne!(Value::from(-1), Value::from(u64::MAX));
        assert_ne!(Value::from(18), Value::from(18.0));
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::from(3).as_number(), Some(Number::I64(3)));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(vec![1]).as_list().map(<[Value]>::len), Some(1));
        assert!(Value::Null.is_null());
        assert!(Value::from(vec![1]).is_list());
        assert_eq!(Number::U64(4).to_f64(), 4.0);
    }
}
