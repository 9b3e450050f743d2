//! Conjunctions of filters.
//!
//! A [`FilterGroup`] is an ordered, immutable sequence of [`Filter`]s that
//! must all hold. Every builder method returns a new group and leaves the
//! receiver untouched.

use std::fmt;
use std::ops::{Add, Bound, Index, RangeBounds};

use crate::error::{CriteriaError, Result};
use crate::filter::Filter;
use crate::operand::Operand;
use crate::value::Value;

/// An AND-ed sequence of filters.
///
/// Duplicates are allowed and insertion order is preserved. Equality and
/// hashing compare the exact ordered content.
///
/// # Example
///
/// ```
/// use standout_criteria::{Filter, FilterGroup};
///
/// let group = FilterGroup::empty()
///     .add_filter_equal("status", "active").unwrap()
///     .add_filter_greater_than("age", 18).unwrap();
///
/// assert_eq!(group.len(), 2);
/// assert_eq!(group.to_string(), "(status == active AND age > 18)");
///
/// let wider = group.clone() + Filter::like("name", "V%").unwrap();
/// assert_eq!(wider.len(), 3);
/// assert_eq!(group.len(), 2);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FilterGroup {
    filters: Vec<Filter>,
}

impl FilterGroup {
    /// Creates a group from any sequence of filters.
    pub fn create(filters: impl IntoIterator<Item = Filter>) -> Self {
        FilterGroup {
            filters: filters.into_iter().collect(),
        }
    }

    /// Creates a group that takes ownership of `filters`.
    pub fn from_list(filters: Vec<Filter>) -> Self {
        FilterGroup { filters }
    }

    /// Creates a group with no filters.
    pub fn empty() -> Self {
        FilterGroup::default()
    }

    // ========================================================================
    // Read access
    // ========================================================================

    /// Number of filters in the group.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns `true` if the group has no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Iterates over the filters in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Filter> {
        self.filters.iter()
    }

    /// Returns `true` if an equal filter is in the group.
    pub fn contains(&self, filter: &Filter) -> bool {
        self.filters.contains(filter)
    }

    /// Returns the filter at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Filter> {
        self.filters.get(index)
    }

    /// The first filter, if any.
    pub fn first(&self) -> Option<&Filter> {
        self.filters.first()
    }

    /// The last filter, if any.
    pub fn last(&self) -> Option<&Filter> {
        self.filters.last()
    }

    /// The filters as a slice.
    pub fn as_slice(&self) -> &[Filter] {
        &self.filters
    }

    /// Returns a new group holding the filters within `range`.
    ///
    /// Bounds past the end are clamped, so an out-of-range slice is empty
    /// rather than a panic.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> FilterGroup {
        let len = self.filters.len();
        let start = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&n) => n.saturating_add(1),
            Bound::Excluded(&n) => n,
            Bound::Unbounded => len,
        }
        .min(len);
        if start >= end {
            return FilterGroup::empty();
        }
        FilterGroup::from_list(self.filters[start..end].to_vec())
    }

    // ========================================================================
    // Builders
    // ========================================================================

    /// Returns a new group with `filter` appended.
    pub fn add_filter(&self, filter: Filter) -> FilterGroup {
        let mut filters = Vec::with_capacity(self.filters.len() + 1);
        filters.extend_from_slice(&self.filters);
        filters.push(filter);
        FilterGroup { filters }
    }

    /// Returns a new group with `filter` placed first.
    pub fn prepend(&self, filter: Filter) -> FilterGroup {
        let mut filters = Vec::with_capacity(self.filters.len() + 1);
        filters.push(filter);
        filters.extend_from_slice(&self.filters);
        FilterGroup { filters }
    }

    /// Returns a new group with the filters of `other` after these.
    pub fn concat(&self, other: &FilterGroup) -> FilterGroup {
        let mut filters = Vec::with_capacity(self.filters.len() + other.filters.len());
        filters.extend_from_slice(&self.filters);
        filters.extend_from_slice(&other.filters);
        FilterGroup { filters }
    }

    /// Appends an equality filter (`==`).
    pub fn add_filter_equal(&self, field: &str, value: impl Into<Value>) -> Result<FilterGroup> {
        Ok(self.add_filter(Filter::equal(field, value)?))
    }

    /// Appends a not-equal filter (`!=`).
    pub fn add_filter_not_equal(
        &self,
        field: &str,
        value: impl Into<Value>,
    ) -> Result<FilterGroup> {
        Ok(self.add_filter(Filter::not_equal(field, value)?))
    }

    /// Appends a greater-than filter (`>`).
    pub fn add_filter_greater_than(
        &self,
        field: &str,
        value: impl Into<Value>,
    ) -> Result<FilterGroup> {
        Ok(self.add_filter(Filter::greater_than(field, value)?))
    }

    /// Appends a greater-than-or-equal filter (`>=`).
    pub fn add_filter_greater_or_equal_than(
        &self,
        field: &str,
        value: impl Into<Value>,
    ) -> Result<FilterGroup> {
        Ok(self.add_filter(Filter::greater_or_equal_than(field, value)?))
    }

    /// Appends a less-than filter (`<`).
    pub fn add_filter_less_than(
        &self,
        field: &str,
        value: impl Into<Value>,
    ) -> Result<FilterGroup> {
        Ok(self.add_filter(Filter::less_than(field, value)?))
    }

    /// Appends a less-than-or-equal filter (`<=`).
    pub fn add_filter_less_or_equal_than(
        &self,
        field: &str,
        value: impl Into<Value>,
    ) -> Result<FilterGroup> {
        Ok(self.add_filter(Filter::less_or_equal_than(field, value)?))
    }

    /// Appends a membership filter (`in`).
    pub fn add_filter_in(&self, field: &str, values: impl Into<Value>) -> Result<FilterGroup> {
        Ok(self.add_filter(Filter::in_(field, values)?))
    }

    /// Appends a negated membership filter (`not in`).
    pub fn add_filter_not_in(&self, field: &str, values: impl Into<Value>) -> Result<FilterGroup> {
        Ok(self.add_filter(Filter::not_in(field, values)?))
    }

    /// Appends a pattern filter (`like`).
    pub fn add_filter_like(&self, field: &str, pattern: impl Into<Value>) -> Result<FilterGroup> {
        Ok(self.add_filter(Filter::like(field, pattern)?))
    }

    /// Appends a negated pattern filter (`not like`).
    pub fn add_filter_not_like(
        &self,
        field: &str,
        pattern: impl Into<Value>,
    ) -> Result<FilterGroup> {
        Ok(self.add_filter(Filter::not_like(field, pattern)?))
    }

    /// Appends a containment filter (`contains`).
    pub fn add_filter_contains(&self, field: &str, value: impl Into<Value>) -> Result<FilterGroup> {
        Ok(self.add_filter(Filter::contains(field, value)?))
    }

    /// Appends a negated containment filter (`not contains`).
    pub fn add_filter_not_contains(
        &self,
        field: &str,
        value: impl Into<Value>,
    ) -> Result<FilterGroup> {
        Ok(self.add_filter(Filter::not_contains(field, value)?))
    }

    // ========================================================================
    // Checked combination
    // ========================================================================

    /// `self + other` for an operand whose kind is known only at runtime.
    ///
    /// A filter is appended and a group is concatenated; anything else is
    /// rejected.
    pub fn try_add<'a>(&self, other: impl Into<Operand<'a>>) -> Result<FilterGroup> {
        match other.into() {
            Operand::Filter(f) => Ok(self.add_filter(f.clone())),
            Operand::Group(g) => Ok(self.concat(g)),
            other => Err(CriteriaError::unsupported(
                "+",
                "FilterGroup",
                other.type_name(),
            )),
        }
    }

    /// `other + self`: a left-hand filter is prepended; anything else is
    /// rejected.
    pub fn try_radd<'a>(&self, other: impl Into<Operand<'a>>) -> Result<FilterGroup> {
        match other.into() {
            Operand::Filter(f) => Ok(self.prepend(f.clone())),
            other => Err(CriteriaError::unsupported(
                "+",
                other.type_name(),
                "FilterGroup",
            )),
        }
    }
}

impl Index<usize> for FilterGroup {
    type Output = Filter;

    fn index(&self, index: usize) -> &Filter {
        &self.filters[index]
    }
}

impl Add<Filter> for FilterGroup {
    type Output = FilterGroup;

    fn add(mut self, rhs: Filter) -> FilterGroup {
        self.filters.push(rhs);
        self
    }
}

impl Add for FilterGroup {
    type Output = FilterGroup;

    fn add(mut self, rhs: FilterGroup) -> FilterGroup {
        self.filters.extend(rhs.filters);
        self
    }
}

impl Add<&Filter> for &FilterGroup {
    type Output = FilterGroup;

    fn add(self, rhs: &Filter) -> FilterGroup {
        self.add_filter(rhs.clone())
    }
}

impl Add<&FilterGroup> for &FilterGroup {
    type Output = FilterGroup;

    fn add(self, rhs: &FilterGroup) -> FilterGroup {
        self.concat(rhs)
    }
}

impl FromIterator<Filter> for FilterGroup {
    fn from_iter<I: IntoIterator<Item = Filter>>(iter: I) -> Self {
        FilterGroup::create(iter)
    }
}

impl IntoIterator for FilterGroup {
    type Item = Filter;
    type IntoIter = std::vec::IntoIter<Filter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.into_iter()
    }
}

impl<'a> IntoIterator for &'a FilterGroup {
    type Item = &'a Filter;
    type IntoIter = std::slice::Iter<'a, Filter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}

impl fmt::Display for FilterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, filter) in self.filters.iter().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            write!(f, "{filter}")?;
        }
        f.write_str(")")
    }
}

impl fmt::Debug for FilterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FilterGroup(")?;
        for (i, filter) in self.filters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{filter:?}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::Criteria;
    use crate::op::Operator;
    use std::collections::HashSet;

    fn eq(field: &str, value: i64) -> Filter {
        Filter::equal(field, value).unwrap()
    }

    #[test]
    fn factories() {
        let a = eq("a", 1);
        let b = eq("b", 2);

        assert!(FilterGroup::empty().is_empty());
        assert_eq!(FilterGroup::create([a.clone(), b.clone()]).len(), 2);
        assert_eq!(
            FilterGroup::from_list(vec![a.clone(), b.clone()]),
            FilterGroup::create([a, b])
        );
    }

    #[test]
    fn read_access() {
        let a = eq("a", 1);
        let b = eq("b", 2);
        let group = FilterGroup::create([a.clone(), b.clone()]);

        assert_eq!(group[0], a);
        assert_eq!(group.get(1), Some(&b));
        assert_eq!(group.get(2), None);
        assert_eq!(group.first(), Some(&a));
        assert_eq!(group.last(), Some(&b));
        assert!(group.contains(&a));
        assert!(!group.contains(&eq("c", 3)));
        assert_eq!(group.iter().count(), 2);
        assert_eq!((&group).into_iter().count(), 2);
    }

    #[test]
    fn slicing_returns_a_group() {
        let filters: Vec<Filter> = (0..4).map(|i| eq("f", i)).collect();
        let group = FilterGroup::from_list(filters.clone());

        assert_eq!(group.slice(1..3).as_slice(), &filters[1..3]);
        assert_eq!(group.slice(..2).as_slice(), &filters[..2]);
        assert_eq!(group.slice(2..).as_slice(), &filters[2..]);
        assert_eq!(group.slice(..=0).as_slice(), &filters[..1]);
        assert!(group.slice(3..1).is_empty());
        assert_eq!(group.slice(2..99).len(), 2);
        assert!(group.slice(10..).is_empty());
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        let a = eq("a", 1);
        let group = FilterGroup::create([a.clone(), a.clone()]);
        assert_eq!(group.len(), 2);
        assert_eq!(group.to_string(), "(a == 1 AND a == 1)");
    }

    #[test]
    fn add_filter_returns_new_group() {
        let original = FilterGroup::empty();
        let grown = original.add_filter(eq("a", 1));
        assert!(original.is_empty());
        assert_eq!(grown.len(), 1);
    }

    #[test]
    fn add_filter_convenience_builders() {
        let group = FilterGroup::empty()
            .add_filter_equal("a", 1)
            .and_then(|g| g.add_filter_not_equal("b", 1))
            .and_then(|g| g.add_filter_greater_than("c", 1))
            .and_then(|g| g.add_filter_greater_or_equal_than("d", 1))
            .and_then(|g| g.add_filter_less_than("e", 1))
            .and_then(|g| g.add_filter_less_or_equal_than("f", 1))
            .and_then(|g| g.add_filter_in("g", vec![1, 2]))
            .and_then(|g| g.add_filter_not_in("h", vec![1, 2]))
            .and_then(|g| g.add_filter_like("i", "x%"))
            .and_then(|g| g.add_filter_not_like("j", "x%"))
            .and_then(|g| g.add_filter_contains("k", "x"))
            .and_then(|g| g.add_filter_not_contains("l", "x"))
            .unwrap();

        let ops: Vec<Operator> = group.iter().map(Filter::operator).collect();
        assert_eq!(ops, Operator::ALL.to_vec());
        let fields: Vec<&str> = group.iter().map(Filter::field).collect();
        assert_eq!(fields, ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l"]);
    }

    #[test]
    fn convenience_builders_validate_field() {
        let err = FilterGroup::empty().add_filter_equal(" ", 1).unwrap_err();
        assert_eq!(err, CriteriaError::EmptyField);
    }

    #[test]
    fn union_appends_and_concatenates() {
        let a = eq("a", 1);
        let b = eq("b", 2);
        let c = eq("c", 3);

        let left = (a.clone() + b.clone()) + c.clone();
        let right = a.clone() + (b.clone() + c.clone());
        assert_eq!(left, right);
        assert_eq!(left.as_slice(), &[a.clone(), b.clone(), c.clone()]);

        let ab = FilterGroup::create([a.clone(), b.clone()]);
        let cc = FilterGroup::create([c.clone()]);
        assert_eq!((&ab + &cc).as_slice(), &[a.clone(), b.clone(), c.clone()]);
        assert_eq!((&ab + &c).as_slice(), &[a, b, c]);
        assert_eq!(ab.len(), 2);
    }

    #[test]
    fn checked_union() {
        let a = eq("a", 1);
        let b = eq("b", 2);
        let group = FilterGroup::create([b.clone()]);

        assert_eq!(group.try_add(&a).unwrap().as_slice(), &[b.clone(), a.clone()]);
        assert_eq!(group.try_radd(&a).unwrap().as_slice(), &[a.clone(), b.clone()]);
        assert_eq!(group.try_add(&group).unwrap().len(), 2);

        let criteria = Criteria::default();
        assert_eq!(
            group.try_add(&criteria).unwrap_err().to_string(),
            "unsupported operand type(s) for +: 'FilterGroup' and 'Criteria'"
        );
        assert_eq!(
            group.try_radd(&criteria).unwrap_err().to_string(),
            "unsupported operand type(s) for +: 'Criteria' and 'FilterGroup'"
        );
        assert!(group.try_radd(&group).is_err());
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(FilterGroup::empty().to_string(), "()");
        assert_eq!(format!("{:?}", FilterGroup::empty()), "FilterGroup()");

        let group = FilterGroup::create([eq("a", 1), Filter::like("b", "x").unwrap()]);
        assert_eq!(group.to_string(), "(a == 1 AND b like x)");
        assert_eq!(
            format!("{group:?}"),
            "FilterGroup(Filter('a', EQUAL, 1), Filter('b', LIKE, 'x'))"
        );
    }

    #[test]
    fn equality_and_hash_follow_order() {
        let a = eq("a", 1);
        let b = eq("b", 2);
        let ab = FilterGroup::create([a.clone(), b.clone()]);
        let ba = FilterGroup::create([b, a]);

        assert_ne!(ab, ba);
        let set: HashSet<FilterGroup> = [ab.clone(), ab.clone(), ba].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn collects_from_iterator() {
        let group: FilterGroup = (0..3).map(|i| eq("n", i)).collect();
        assert_eq!(group.len(), 3);
        let back: Vec<Filter> = group.into_iter().collect();
        assert_eq!(back.len(), 3);
    }
}
