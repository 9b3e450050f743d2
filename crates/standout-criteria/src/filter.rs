//! Single filter predicates.
//!
//! A [`Filter`] represents one predicate: a field name, an operator, and a
//! comparison value. Filters are immutable; combining them produces a
//! [`FilterGroup`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;

use crate::error::{CriteriaError, Result};
use crate::group::FilterGroup;
use crate::op::{IntoOperator, Operator};
use crate::operand::Operand;
use crate::value::Value;

/// A single filter predicate.
///
/// A filter consists of:
/// - A field name (never blank)
/// - An operator (how to compare)
/// - A value (what to compare against)
///
/// # Example
///
/// ```
/// use standout_criteria::{Filter, Operator};
///
/// let by_token = Filter::new("age", ">", 18).unwrap();
/// let by_factory = Filter::greater_than("age", 18).unwrap();
///
/// assert_eq!(by_token, by_factory);
/// assert_eq!(by_token.operator(), Operator::Gt);
/// assert_eq!(by_token.to_string(), "age > 18");
/// ```
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "FilterRepr"))]
pub struct Filter {
    field: String,
    operator: Operator,
    value: Value,
}

impl Filter {
    /// Creates a new filter.
    ///
    /// `operator` is either an [`Operator`] or one of its textual tokens.
    /// Fails if the field is blank or the token is unknown.
    pub fn new(
        field: impl Into<String>,
        operator: impl IntoOperator,
        value: impl Into<Value>,
    ) -> Result<Self> {
        let field = field.into();
        if field.trim().is_empty() {
            tracing::trace!(field = %field, "rejected blank filter field");
            return Err(CriteriaError::EmptyField);
        }
        Ok(Filter {
            field,
            operator: operator.into_operator()?,
            value: value.into(),
        })
    }

    /// The field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The comparison operator.
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The comparison value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    // ========================================================================
    // Factories
    // ========================================================================

    /// Creates an equality filter (`==`).
    pub fn equal(field: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        Filter::new(field, Operator::Equal, value)
    }

    /// Creates a not-equal filter (`!=`).
    pub fn not_equal(field: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        Filter::new(field, Operator::NotEqual, value)
    }

    /// Creates a greater-than filter (`>`).
    pub fn greater_than(field: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        Filter::new(field, Operator::Gt, value)
    }

    /// Creates a greater-than-or-equal filter (`>=`).
    pub fn greater_or_equal_than(
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self> {
        Filter::new(field, Operator::Gte, value)
    }

    /// Creates a less-than filter (`<`).
    pub fn less_than(field: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        Filter::new(field, Operator::Lt, value)
    }

    /// Creates a less-than-or-equal filter (`<=`).
    pub fn less_or_equal_than(field: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        Filter::new(field, Operator::Lte, value)
    }

    /// Creates a membership filter (`in`).
    pub fn in_(field: impl Into<String>, values: impl Into<Value>) -> Result<Self> {
        Filter::new(field, Operator::In, values)
    }

    /// Creates a negated membership filter (`not in`).
    pub fn not_in(field: impl Into<String>, values: impl Into<Value>) -> Result<Self> {
        Filter::new(field, Operator::NotIn, values)
    }

    /// Creates a containment filter (`contains`).
    pub fn contains(field: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        Filter::new(field, Operator::Contains, value)
    }

    /// Creates a negated containment filter (`not contains`).
    pub fn not_contains(field: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        Filter::new(field, Operator::NotContains, value)
    }

    /// Creates a pattern filter (`like`).
    pub fn like(field: impl Into<String>, pattern: impl Into<Value>) -> Result<Self> {
        Filter::new(field, Operator::Like, pattern)
    }

    /// Creates a negated pattern filter (`not like`).
    pub fn not_like(field: impl Into<String>, pattern: impl Into<Value>) -> Result<Self> {
        Filter::new(field, Operator::NotLike, pattern)
    }

    // ========================================================================
    // Combination
    // ========================================================================

    /// Conjoins this filter with another: `[self, other]`.
    pub fn and_filter(&self, other: &Filter) -> FilterGroup {
        FilterGroup::from_list(vec![self.clone(), other.clone()])
    }

    /// Conjoins this filter with a group, placing this filter first.
    pub fn and_group(&self, group: &FilterGroup) -> FilterGroup {
        group.prepend(self.clone())
    }

    /// Conjoins this filter with an operand of any kind.
    ///
    /// Fails with [`CriteriaError::UnsupportedOperand`] unless the operand
    /// is a [`Filter`] or a [`FilterGroup`].
    pub fn try_add<'a>(&self, other: impl Into<Operand<'a>>) -> Result<FilterGroup> {
        match other.into() {
            Operand::Filter(f) => Ok(self.and_filter(f)),
            Operand::Group(g) => Ok(self.and_group(g)),
            other => Err(CriteriaError::unsupported(
                "+",
                "Filter",
                other.type_name(),
            )),
        }
    }
}

impl Hash for Filter {
    /// Hashes `(field, operator, value)`.
    ///
    /// Values without a stable structural hash (floats) are hashed through
    /// their display form instead, trading hash quality for usability as a
    /// set or map key.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.field.hash(state);
        self.operator.hash(state);
        if self.value.has_stable_hash() {
            self.value.hash_structural(state);
        } else {
            self.value.hash_display(state);
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.operator, self.value)
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Filter('{}', {}, {:?})",
            self.field,
            self.operator.name(),
            self.value
        )
    }
}

impl Add for Filter {
    type Output = FilterGroup;

    fn add(self, rhs: Filter) -> FilterGroup {
        FilterGroup::from_list(vec![self, rhs])
    }
}

impl Add<FilterGroup> for Filter {
    type Output = FilterGroup;

    fn add(self, rhs: FilterGroup) -> FilterGroup {
        rhs.prepend(self)
    }
}

impl Add<&Filter> for &Filter {
    type Output = FilterGroup;

    fn add(self, rhs: &Filter) -> FilterGroup {
        self.and_filter(rhs)
    }
}

impl Add<&FilterGroup> for &Filter {
    type Output = FilterGroup;

    fn add(self, rhs: &FilterGroup) -> FilterGroup {
        self.and_group(rhs)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct FilterRepr {
    field: String,
    operator: Operator,
    value: Value,
}

#[cfg(feature = "serde")]
impl TryFrom<FilterRepr> for Filter {
    type Error = CriteriaError;

    fn try_from(repr: FilterRepr) -> Result<Self> {
        Filter::new(repr.field, repr.operator, repr.value)
    }
}
