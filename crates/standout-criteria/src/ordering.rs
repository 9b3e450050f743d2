//! Ordering clause for criteria.
//!
//! Provides [`OrderType`] for sort direction and [`Order`] for the list of
//! fields to sort by.

use std::fmt;
use std::str::FromStr;

use crate::error::{CriteriaError, Result};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum OrderType {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
    /// No ordering.
    None,
}

impl OrderType {
    /// Parses a case-insensitive order type token (`asc`, `desc`, `none`).
    pub fn parse(token: &str) -> Result<OrderType> {
        match token.to_uppercase().as_str() {
            "ASC" => Ok(OrderType::Asc),
            "DESC" => Ok(OrderType::Desc),
            "NONE" => Ok(OrderType::None),
            _ => {
                tracing::trace!(token, "rejected order type token");
                Err(CriteriaError::UnknownOrderType(token.to_string()))
            }
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderType::Asc => "ASC",
            OrderType::Desc => "DESC",
            OrderType::None => "NONE",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self> {
        OrderType::parse(s)
    }
}

/// Conversion into an [`OrderType`], accepting the enum or a string token.
pub trait IntoOrderType {
    /// Resolves `self` to an order type.
    fn into_order_type(self) -> Result<OrderType>;
}

impl IntoOrderType for OrderType {
    fn into_order_type(self) -> Result<OrderType> {
        Ok(self)
    }
}

impl IntoOrderType for &str {
    fn into_order_type(self) -> Result<OrderType> {
        OrderType::parse(self)
    }
}

impl IntoOrderType for String {
    fn into_order_type(self) -> Result<OrderType> {
        OrderType::parse(&self)
    }
}

/// The fields to sort by and the direction applied to them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    by: Vec<String>,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    order_type: OrderType,
}

impl Order {
    /// Creates an ordering over `by` with the given direction.
    pub fn new<I, S>(by: I, order_type: OrderType) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Order {
            by: by.into_iter().map(Into::into).collect(),
            order_type,
        }
    }

    /// Creates an ascending ordering.
    pub fn asc<I, S>(by: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Order::new(by, OrderType::Asc)
    }

    /// Creates a descending ordering.
    pub fn desc<I, S>(by: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Order::new(by, OrderType::Desc)
    }

    /// "No ordering": no fields, type `NONE`.
    pub fn none() -> Self {
        Order {
            by: Vec::new(),
            order_type: OrderType::None,
        }
    }

    /// The fields to sort by, most significant first.
    pub fn by(&self) -> &[String] {
        &self.by
    }

    /// The sort direction.
    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    /// Returns `true` if this ordering actually sorts something.
    pub fn is_active(&self) -> bool {
        self.order_type != OrderType::None && !self.by.is_empty()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.by.is_empty() {
            return Ok(());
        }
        write!(f, "{} {}", self.by.join(", "), self.order_type)
    }
}
