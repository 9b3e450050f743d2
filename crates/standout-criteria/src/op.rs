//! Comparison operators for filter predicates.
//!
//! The [`Operator`] enum is the closed set of predicate kinds a [`Filter`]
//! can carry. Operators can be named directly or parsed from their textual
//! tokens, including the legacy `=` and `<>` spellings.
//!
//! [`Filter`]: crate::Filter

use std::str::FromStr;

use crate::error::{CriteriaError, Result};

/// Comparison operator for a filter.
///
/// Grouped by kind:
/// - **Equality**: `Equal`, `NotEqual`
/// - **Ordering**: `Gt`, `Gte`, `Lt`, `Lte`
/// - **Membership**: `In`, `NotIn`
/// - **Pattern**: `Like`, `NotLike`
/// - **Containment**: `Contains`, `NotContains`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (`==`).
    Equal,
    /// Not equal (`!=`).
    NotEqual,
    /// Greater than (`>`).
    Gt,
    /// Greater than or equal (`>=`).
    Gte,
    /// Less than (`<`).
    Lt,
    /// Less than or equal (`<=`).
    Lte,
    /// Value is one of a sequence (`in`).
    In,
    /// Value is none of a sequence (`not in`).
    NotIn,
    /// Pattern match (`like`).
    Like,
    /// Negated pattern match (`not like`).
    NotLike,
    /// Field contains the value (`contains`).
    Contains,
    /// Field does not contain the value (`not contains`).
    NotContains,
}

/// Alias table used by [`Operator::parse`].
const ALIASES: &[(&str, Operator)] = &[
    ("==", Operator::Equal),
    ("=", Operator::Equal),
    ("!=", Operator::NotEqual),
    ("<>", Operator::NotEqual),
    (">", Operator::Gt),
    (">=", Operator::Gte),
    ("<", Operator::Lt),
    ("<=", Operator::Lte),
    ("in", Operator::In),
    ("not in", Operator::NotIn),
    ("like", Operator::Like),
    ("not like", Operator::NotLike),
    ("contains", Operator::Contains),
    ("not contains", Operator::NotContains),
];

fn lookup(token: &str) -> Option<Operator> {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == token)
        .map(|(_, op)| *op)
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: [Operator; 12] = [
        Operator::Equal,
        Operator::NotEqual,
        Operator::Gt,
        Operator::Gte,
        Operator::Lt,
        Operator::Lte,
        Operator::In,
        Operator::NotIn,
        Operator::Like,
        Operator::NotLike,
        Operator::Contains,
        Operator::NotContains,
    ];

    /// Parses an operator token.
    ///
    /// The token is trimmed and lowercased before lookup. If that misses,
    /// the raw token is tried verbatim.
    ///
    /// ```
    /// use standout_criteria::Operator;
    ///
    /// assert_eq!(Operator::parse(" NOT IN ").unwrap(), Operator::NotIn);
    /// assert_eq!(Operator::parse("<>").unwrap(), Operator::NotEqual);
    /// assert!(Operator::parse("~=").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Operator> {
        let normalized = token.trim().to_lowercase();
        lookup(&normalized)
            .or_else(|| lookup(token))
            .ok_or_else(|| {
                tracing::trace!(token, "rejected operator token");
                CriteriaError::UnknownOperator(token.to_string())
            })
    }

    /// Returns the canonical token, as used in the display form.
    pub fn token(self) -> &'static str {
        match self {
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::In => "in",
            Operator::NotIn => "not in",
            Operator::Like => "like",
            Operator::NotLike => "not like",
            Operator::Contains => "contains",
            Operator::NotContains => "not contains",
        }
    }

    /// Returns the upper-case name used in debug output.
    pub fn name(self) -> &'static str {
        match self {
            Operator::Equal => "EQUAL",
            Operator::NotEqual => "NOT_EQUAL",
            Operator::Gt => "GT",
            Operator::Gte => "GTE",
            Operator::Lt => "LT",
            Operator::Lte => "LTE",
            Operator::In => "IN",
            Operator::NotIn => "NOT_IN",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT_LIKE",
            Operator::Contains => "CONTAINS",
            Operator::NotContains => "NOT_CONTAINS",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Operator {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self> {
        Operator::parse(s)
    }
}

/// Conversion into an [`Operator`], used by constructors that accept either
/// an operator value or one of its textual tokens.
pub trait IntoOperator {
    /// Resolves `self` to an operator.
    fn into_operator(self) -> Result<Operator>;
}

impl IntoOperator for Operator {
    fn into_operator(self) -> Result<Operator> {
        Ok(self)
    }
}

impl IntoOperator for &str {
    fn into_operator(self) -> Result<Operator> {
        Operator::parse(self)
    }
}

impl IntoOperator for String {
    fn into_operator(self) -> Result<Operator> {
        Operator::parse(&self)
    }
}

impl IntoOperator for &String {
    fn into_operator(self) -> Result<Operator> {
        Operator::parse(self)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Operator {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Operator {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Operator::parse(&token).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonical_tokens() {
        for op in Operator::ALL {
            assert_eq!(Operator::parse(op.token()).unwrap(), op);
        }
    }

    #[test]
    fn parse_legacy_aliases() {
        assert_eq!(Operator::parse("=").unwrap(), Operator::Equal);
        assert_eq!(Operator::parse("<>").unwrap(), Operator::NotEqual);
    }

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        assert_eq!(Operator::parse("LIKE").unwrap(), Operator::Like);
        assert_eq!(Operator::parse("  Not Contains ").unwrap(), Operator::NotContains);
        assert_eq!(Operator::parse(" >= ").unwrap(), Operator::Gte);
    }

    #[test]
    fn parse_unknown_token() {
        let err = Operator::parse("between").unwrap_err();
        assert_eq!(err, CriteriaError::UnknownOperator("between".to_string()));
        assert!(Operator::parse("").is_err());
        assert!(Operator::parse("not  in").is_err());
    }

    #[test]
    fn from_str_and_into_operator() {
        let op: Operator = "!=".parse().unwrap();
        assert_eq!(op, Operator::NotEqual);
        assert_eq!(Operator::In.into_operator().unwrap(), Operator::In);
        assert_eq!("in".into_operator().unwrap(), Operator::In);
        assert_eq!(String::from("<").into_operator().unwrap(), Operator::Lt);
    }

    #[test]
    fn display_and_name() {
        assert_eq!(Operator::Equal.to_string(), "==");
        assert_eq!(Operator::NotIn.to_string(), "not in");
        assert_eq!(Operator::NotIn.name(), "NOT_IN");
        assert_eq!(Operator::Gte.name(), "GTE");
    }
}
