//! Dynamically-kinded operands for the checked combinators.
//!
//! The `+`, `|` and `&` operators are statically typed, so combining the
//! wrong kinds is a compile error. Code that assembles criteria from parts
//! whose kind is only known at runtime uses [`Operand`] with the `try_*`
//! methods instead, which report a mismatch as
//! [`CriteriaError::UnsupportedOperand`].
//!
//! [`CriteriaError::UnsupportedOperand`]: crate::CriteriaError::UnsupportedOperand

use crate::criteria::Criteria;
use crate::filter::Filter;
use crate::group::FilterGroup;

/// A borrowed filter, group or criteria.
///
/// # Example
///
/// ```
/// use standout_criteria::{Criteria, Filter, Operand};
///
/// let filter = Filter::equal("status", "active").unwrap();
/// let err = Criteria::default().try_union(&filter).unwrap_err();
///
/// assert_eq!(Operand::from(&filter).type_name(), "Filter");
/// assert!(err.to_string().contains("'Criteria' and 'Filter'"));
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    /// A single predicate.
    Filter(&'a Filter),
    /// A conjunction of predicates.
    Group(&'a FilterGroup),
    /// A full criteria.
    Criteria(&'a Criteria),
}

impl Operand<'_> {
    /// Returns the name of the operand's type, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Filter(_) => "Filter",
            Operand::Group(_) => "FilterGroup",
            Operand::Criteria(_) => "Criteria",
        }
    }
}

impl<'a> From<&'a Filter> for Operand<'a> {
    fn from(f: &'a Filter) -> Self {
        Operand::Filter(f)
    }
}

impl<'a> From<&'a FilterGroup> for Operand<'a> {
    fn from(g: &'a FilterGroup) -> Self {
        Operand::Group(g)
    }
}

impl<'a> From<&'a Criteria> for Operand<'a> {
    fn from(c: &'a Criteria) -> Self {
        Operand::Criteria(c)
    }
}
