//! Criteria - backend-independent query specifications.
//!
//! Criteria describe *which records to select, in what order, and which
//! page of results* without committing to a storage engine. Repository
//! implementations translate them into SQL, an ORM query or an in-memory
//! filter. The crate provides:
//!
//! - Single predicates ([`Filter`]) over a field, an [`Operator`] and a [`Value`]
//! - Conjunctions of predicates ([`FilterGroup`])
//! - Disjunctions of groups plus ordering and pagination ([`Criteria`])
//! - Canonical string forms for logging and debugging
//!
//! Every type is an immutable value: builders return new instances and
//! never modify the receiver, so criteria can be shared across threads
//! freely.
//!
//! # Quick Start
//!
//! ```rust
//! use standout_criteria::{Criteria, Filter, FilterGroup, Order, Page};
//!
//! // Fluent construction, one group index per OR branch
//! let admins = Criteria::default()
//!     .filter("role", "==", "admin", 0)?
//!     .order_by(["last_name"], "asc")?
//!     .limit(10)?;
//!
//! // Or assemble the parts directly
//! let adults = FilterGroup::create([
//!     Filter::equal("status", "active")?,
//!     Filter::greater_or_equal_than("age", 18)?,
//! ]);
//! let active = Criteria::default().with_filter_group(adults);
//!
//! let either = &admins | &active;
//! assert_eq!(either.groups().len(), 2);
//! assert_eq!(
//!     either.to_string(),
//!     "WHERE (role == admin) OR (status == active AND age >= 18) \
//!      ORDER BY last_name ASC LIMIT 10 OFFSET 0"
//! );
//! # Ok::<(), standout_criteria::CriteriaError>(())
//! ```
//!
//! # Semantics
//!
//! ```text
//! match = (all filters of group 0) ∨ (all filters of group 1) ∨ ...
//! ```
//!
//! - `Filter + Filter` and `Filter + FilterGroup` build a [`FilterGroup`]
//! - `Criteria | Criteria` concatenates the group lists (OR)
//! - `Criteria & Criteria` flattens every filter into one group (AND);
//!   this does not distribute over the OR branches
//!
//! Both combinators keep the left operand's [`Order`] and [`Page`].
//!
//! # Operators
//!
//! | Operator | Token | Legacy alias |
//! |----------|-------|--------------|
//! | `Equal` | `==` | `=` |
//! | `NotEqual` | `!=` | `<>` |
//! | `Gt`, `Gte`, `Lt`, `Lte` | `>`, `>=`, `<`, `<=` | |
//! | `In`, `NotIn` | `in`, `not in` | |
//! | `Like`, `NotLike` | `like`, `not like` | |
//! | `Contains`, `NotContains` | `contains`, `not contains` | |
//!
//! Tokens are matched case-insensitively after trimming.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for every type. Deserialization
//!   re-checks the same invariants as the constructors.

mod criteria;
mod error;
mod filter;
mod group;
mod op;
mod operand;
mod ordering;
mod page;
mod value;

// Re-export public API
pub use criteria::Criteria;
pub use error::{CriteriaError, Result};
pub use filter::Filter;
pub use group::FilterGroup;
pub use op::{IntoOperator, Operator};
pub use operand::Operand;
pub use ordering::{IntoOrderType, Order, OrderType};
pub use page::Page;
pub use value::{Number, Value};
