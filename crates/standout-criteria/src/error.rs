//! Error types for the criteria crate.

use thiserror::Error;

/// Errors that can occur when building criteria.
///
/// Every variant signals a programming error at the call site: an invalid
/// value passed to a constructor, or two operands that cannot be combined.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaError {
    /// A filter was built with an empty or whitespace-only field name.
    #[error("filter field cannot be empty")]
    EmptyField,

    /// A page limit or offset was negative.
    #[error("{name} must be >= 0, got {value}")]
    NegativePage { name: &'static str, value: i64 },

    /// The operator token is not a recognized alias.
    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    /// The order type token is not one of `asc`, `desc` or `none`.
    #[error("unknown order type: {0}")]
    UnknownOrderType(String),

    /// A filter group index cannot be addressed.
    #[error("group index {0} is out of range")]
    GroupIndexOutOfRange(usize),

    /// Two operands of incompatible kinds were combined.
    #[error("unsupported operand type(s) for {op}: '{left}' and '{right}'{}", hint_suffix(.hint))]
    UnsupportedOperand {
        op: &'static str,
        left: &'static str,
        right: &'static str,
        hint: Option<&'static str>,
    },
}

impl CriteriaError {
    pub(crate) fn unsupported(op: &'static str, left: &'static str, right: &'static str) -> Self {
        tracing::trace!(op, left, right, "rejected operand");
        CriteriaError::UnsupportedOperand {
            op,
            left,
            right,
            hint: None,
        }
    }

    pub(crate) fn with_hint(self, text: &'static str) -> Self {
        match self {
            CriteriaError::UnsupportedOperand {
                op, left, right, ..
            } => CriteriaError::UnsupportedOperand {
                op,
                left,
                right,
                hint: Some(text),
            },
            other => other,
        }
    }
}

fn hint_suffix(hint: &Option<&'static str>) -> String {
    hint.map(|h| format!(". {h}")).unwrap_or_default()
}

/// Result type for criteria operations.
pub type Result<T> = std::result::Result<T, CriteriaError>;
