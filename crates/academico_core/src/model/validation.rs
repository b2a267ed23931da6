//! Write-time invariants shared by catalog records.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Invariant violations detected before persistence or after reading rows.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogValidationError {
    /// A required text field is empty after trim.
    BlankField(&'static str),
    /// Course duration must be at least one term.
    ZeroDuration,
    /// Staff salary cannot be negative or NaN.
    InvalidSalary(f64),
}

impl Display for CatalogValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField(field) => write!(f, "{field} must not be blank"),
            Self::ZeroDuration => write!(f, "course duration must be at least one term"),
            Self::InvalidSalary(value) => {
                write!(f, "salary must be a non-negative number, got {value}")
            }
        }
    }
}

impl Error for CatalogValidationError {}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), CatalogValidationError> {
    if value.trim().is_empty() {
        return Err(CatalogValidationError::BlankField(field));
    }
    Ok(())
}
