//! Criteria: filter groups plus ordering and pagination.
//!
//! The [`Criteria`] struct is the value a persistence adapter receives. It
//! is built through copy-on-write methods: each returns a new criteria and
//! leaves the receiver as it was.

use std::fmt;
use std::ops::{BitAnd, BitOr};

use crate::error::{CriteriaError, Result};
use crate::filter::Filter;
use crate::group::FilterGroup;
use crate::op::IntoOperator;
use crate::operand::Operand;
use crate::ordering::{IntoOrderType, Order};
use crate::page::Page;
use crate::value::Value;

const OPERAND_HINT: &str = "Use Criteria::with_filter_group() to add filters.";

/// A backend-independent query description.
///
/// Criteria combine:
/// - **Groups**: OR-ed together; the filters inside a group are AND-ed
/// - **Order**: the fields to sort by and their direction
/// - **Page**: the limit/offset window
///
/// ```text
/// match = group[0] ∨ group[1] ∨ ...     where group[i] = f0 ∧ f1 ∧ ...
/// ```
///
/// Equality is structural: the same groups in a different order make a
/// different criteria.
///
/// # Example
///
/// ```
/// use standout_criteria::Criteria;
///
/// let criteria = Criteria::default()
///     .filter("status", "==", "active", 0).unwrap()
///     .filter("age", ">", 18, 0).unwrap()
///     .filter("role", "==", "admin", 1).unwrap()
///     .order_by(["last_name", "first_name"], "DESC").unwrap()
///     .limit(20).unwrap()
///     .offset(40).unwrap();
///
/// assert_eq!(
///     criteria.to_string(),
///     "WHERE (status == active AND age > 18) OR (role == admin) \
///      ORDER BY last_name, first_name DESC LIMIT 20 OFFSET 40"
/// );
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Criteria {
    groups: Vec<FilterGroup>,
    order: Order,
    page: Page,
}

impl Default for Criteria {
    /// No groups, no ordering, default page.
    fn default() -> Self {
        Criteria {
            groups: Vec::new(),
            order: Order::none(),
            page: Page::default(),
        }
    }
}

impl Criteria {
    /// Creates a criteria from all of its parts.
    pub fn new(groups: impl IntoIterator<Item = FilterGroup>, order: Order, page: Page) -> Self {
        Criteria {
            groups: groups.into_iter().collect(),
            order,
            page,
        }
    }

    fn with_groups(&self, groups: Vec<FilterGroup>) -> Criteria {
        Criteria {
            groups,
            order: self.order.clone(),
            page: self.page,
        }
    }

    // ========================================================================
    // Copy-on-write builders
    // ========================================================================

    /// Returns a new criteria with `group` appended as another OR branch.
    pub fn with_filter_group(&self, group: FilterGroup) -> Criteria {
        let mut groups = self.groups.clone();
        groups.push(group);
        self.with_groups(groups)
    }

    /// Returns a new criteria with the order replaced.
    pub fn with_order(&self, order: Order) -> Criteria {
        Criteria {
            groups: self.groups.clone(),
            order,
            page: self.page,
        }
    }

    /// Returns a new criteria with the page replaced.
    pub fn with_page(&self, page: Page) -> Criteria {
        Criteria {
            groups: self.groups.clone(),
            order: self.order.clone(),
            page,
        }
    }

    /// Returns a new criteria with the page limit replaced.
    pub fn with_page_limit(&self, limit: i64) -> Result<Criteria> {
        Ok(self.with_page(self.page.with_limit(limit)?))
    }

    /// Returns a new criteria with the page offset replaced.
    pub fn with_page_offset(&self, offset: i64) -> Result<Criteria> {
        Ok(self.with_page(self.page.with_offset(offset)?))
    }

    /// Adds a filter to the group at index `group`.
    ///
    /// Missing groups up to `group` are created empty, so asking for group
    /// 3 on an empty criteria yields `[(), (), (), (filter)]`. Existing
    /// groups keep their position.
    pub fn filter(
        &self,
        field: &str,
        operator: impl IntoOperator,
        value: impl Into<Value>,
        group: usize,
    ) -> Result<Criteria> {
        let filter = Filter::new(field, operator, value)?;

        let len = group.checked_add(1).ok_or_else(|| {
            tracing::trace!(group, "rejected group index");
            CriteriaError::GroupIndexOutOfRange(group)
        })?;

        let mut groups = self.groups.clone();
        if groups.len() < len {
            groups.resize_with(len, FilterGroup::empty);
        }
        groups[group] = groups[group].add_filter(filter);

        Ok(self.with_groups(groups))
    }

    /// Returns a new criteria ordered by `by`.
    ///
    /// `order_type` is an [`OrderType`](crate::OrderType) or one of the
    /// case-insensitive tokens `asc`, `desc`, `none`.
    pub fn order_by<I, S>(&self, by: I, order_type: impl IntoOrderType) -> Result<Criteria>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let order = Order::new(by, order_type.into_order_type()?);
        Ok(self.with_order(order))
    }

    /// Shorthand for [`with_page_limit`](Self::with_page_limit).
    pub fn limit(&self, limit: i64) -> Result<Criteria> {
        self.with_page_limit(limit)
    }

    /// Shorthand for [`with_page_offset`](Self::with_page_offset).
    pub fn offset(&self, offset: i64) -> Result<Criteria> {
        self.with_page_offset(offset)
    }

    // ========================================================================
    // Combination
    // ========================================================================

    /// Logical OR: all of this criteria's groups followed by all of
    /// `other`'s. Order and page come from `self`.
    pub fn union(&self, other: &Criteria) -> Criteria {
        let mut groups = Vec::with_capacity(self.groups.len() + other.groups.len());
        groups.extend_from_slice(&self.groups);
        groups.extend_from_slice(&other.groups);
        self.with_groups(groups)
    }

    /// Logical AND: every filter of both operands conjoined in a single
    /// group. Order and page come from `self`.
    ///
    /// Group boundaries are flattened rather than distributed, so
    /// `(a ∨ b) ∧ c` becomes `a ∧ b ∧ c`. When neither side has filters the
    /// result has no groups at all.
    pub fn intersect(&self, other: &Criteria) -> Criteria {
        let all: Vec<Filter> = self.filters().chain(other.filters()).cloned().collect();
        if all.is_empty() {
            return self.with_groups(Vec::new());
        }
        self.with_groups(vec![FilterGroup::from_list(all)])
    }

    /// [`union`](Self::union) for an operand whose kind is known only at
    /// runtime. Filters and groups are rejected, not wrapped.
    pub fn try_union<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Criteria> {
        match other.into() {
            Operand::Criteria(c) => Ok(self.union(c)),
            other => Err(CriteriaError::unsupported("|", "Criteria", other.type_name())
                .with_hint(OPERAND_HINT)),
        }
    }

    /// [`intersect`](Self::intersect) for an operand whose kind is known
    /// only at runtime. Filters and groups are rejected, not wrapped.
    pub fn try_intersect<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Criteria> {
        match other.into() {
            Operand::Criteria(c) => Ok(self.intersect(c)),
            other => Err(CriteriaError::unsupported("&", "Criteria", other.type_name())
                .with_hint(OPERAND_HINT)),
        }
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Every filter of every group, group by group.
    pub fn filters(&self) -> impl Iterator<Item = &Filter> + '_ {
        self.groups.iter().flat_map(FilterGroup::iter)
    }

    /// The OR-ed groups, in order.
    pub fn groups(&self) -> &[FilterGroup] {
        &self.groups
    }

    /// The ordering clause.
    pub fn order(&self) -> &Order {
        &self.order
    }

    /// The pagination window.
    pub fn page(&self) -> Page {
        self.page
    }

    /// Returns `true` if at least one group has a filter.
    pub fn has_filters(&self) -> bool {
        self.groups.iter().any(|g| !g.is_empty())
    }

    /// Returns `true` if the order sorts by at least one field.
    pub fn has_order(&self) -> bool {
        self.order.is_active()
    }
}

impl BitOr for Criteria {
    type Output = Criteria;

    fn bitor(self, rhs: Criteria) -> Criteria {
        self.union(&rhs)
    }
}

impl BitOr<&Criteria> for &Criteria {
    type Output = Criteria;

    fn bitor(self, rhs: &Criteria) -> Criteria {
        self.union(rhs)
    }
}

impl BitAnd for Criteria {
    type Output = Criteria;

    fn bitand(self, rhs: Criteria) -> Criteria {
        self.intersect(&rhs)
    }
}

impl BitAnd<&Criteria> for &Criteria {
    type Output = Criteria;

    fn bitand(self, rhs: &Criteria) -> Criteria {
        self.intersect(rhs)
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();

        if self.has_filters() {
            let groups: Vec<String> = self
                .groups
                .iter()
                .filter(|g| !g.is_empty())
                .map(ToString::to_string)
                .collect();
            parts.push(format!("WHERE {}", groups.join(" OR ")));
        }

        if self.has_order() {
            parts.push(format!("ORDER BY {}", self.order));
        }

        if !self.page.is_default() {
            parts.push(format!(
                "LIMIT {} OFFSET {}",
                self.page.limit(),
                self.page.offset()
            ));
        }

        f.write_str(&parts.join(" "))
    }
}

impl fmt::Debug for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Criteria(groups={}", self.groups.len())?;
        if self.has_filters() {
            write!(f, ", filters={}", self.filters().count())?;
        }
        if self.has_order() {
            let by: Vec<String> = self.order.by().iter().map(|s| format!("'{s}'")).collect();
            // One-element tuples keep their trailing comma: ('a',)
            let trailing = if by.len() == 1 { "," } else { "" };
            write!(f, ", order=({}{trailing})", by.join(", "))?;
        }
        if !self.page.is_default() {
            write!(
                f,
                ", page=({}, {})",
                self.page.limit(),
                self.page.offset()
            )?;
        }
        f.write_str(")")
    }
}
