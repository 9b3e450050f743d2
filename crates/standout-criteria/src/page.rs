//! Pagination window.

use std::fmt;

use crate::error::{CriteriaError, Result};

/// A limit/offset pagination window.
///
/// Both values are non-negative. The default window is 25 items from the
/// start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PageRepr"))]
pub struct Page {
    limit: u64,
    offset: u64,
}

impl Page {
    /// Limit used when none is given.
    pub const DEFAULT_LIMIT: u64 = 25;

    /// Creates a page, failing if either value is negative.
    ///
    /// ```
    /// use standout_criteria::Page;
    ///
    /// assert_eq!(Page::new(10, 20).unwrap().to_string(), "10, 20");
    /// assert!(Page::new(0, 0).is_ok());
    /// assert!(Page::new(-1, 0).is_err());
    /// ```
    pub fn new(limit: i64, offset: i64) -> Result<Self> {
        Ok(Page {
            limit: non_negative("limit", limit)?,
            offset: non_negative("offset", offset)?,
        })
    }

    /// Maximum number of items.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Number of items to skip.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns a copy with the limit replaced.
    pub fn with_limit(self, limit: i64) -> Result<Self> {
        Ok(Page {
            limit: non_negative("limit", limit)?,
            ..self
        })
    }

    /// Returns a copy with the offset replaced.
    pub fn with_offset(self, offset: i64) -> Result<Self> {
        Ok(Page {
            offset: non_negative("offset", offset)?,
            ..self
        })
    }

    /// Returns `true` if this is the default window.
    pub fn is_default(&self) -> bool {
        *self == Page::default()
    }
}

fn non_negative(name: &'static str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| {
        tracing::trace!(name, value, "rejected negative page value");
        CriteriaError::NegativePage { name, value }
    })
}

impl Default for Page {
    fn default() -> Self {
        Page {
            limit: Page::DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.limit, self.offset)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PageRepr {
    limit: i64,
    offset: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<PageRepr> for Page {
    type Error = CriteriaError;

    fn try_from(repr: PageRepr) -> Result<Self> {
        Page::new(repr.limit, repr.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window() {
        let page = Page::default();
        assert_eq!(page.limit(), 25);
        assert_eq!(page.offset(), 0);
        assert!(page.is_default());
        assert_eq!(page.to_string(), "25, 0");
    }

    #[test]
    fn zero_is_valid() {
        let page = Page::new(0, 0).unwrap();
        assert_eq!(page.limit(), 0);
        assert_eq!(page.offset(), 0);
        assert!(!page.is_default());
    }

    #[test]
    fn negative_values_are_rejected() {
        assert_eq!(
            Page::new(-1, 0).unwrap_err(),
            CriteriaError::NegativePage {
                name: "limit",
                value: -1
            }
        );
        assert_eq!(
            Page::new(10, -5).unwrap_err(),
            CriteriaError::NegativePage {
                name: "offset",
                value: -5
            }
        );
        assert_eq!(
            Page::new(-1, -1).unwrap_err().to_string(),
            "limit must be >= 0, got -1"
        );
    }

    #[test]
    fn replace_one_side() {
        let page = Page::new(10, 20).unwrap();
        assert_eq!(page.with_limit(5).unwrap(), Page::new(5, 20).unwrap());
        assert_eq!(page.with_offset(0).unwrap(), Page::new(10, 0).unwrap());
        assert!(page.with_limit(-3).is_err());
        assert_eq!(page, Page::new(10, 20).unwrap());
    }

    #[test]
    fn equality() {
        assert_eq!(Page::new(25, 0).unwrap(), Page::default());
        assert_ne!(Page::new(10, 0).unwrap(), Page::new(10, 1).unwrap());
    }
}
