//! Error types for design calculations.

use bd_core::error::BdError;
use bd_core::numeric::ensure_finite;
use thiserror::Error;

/// Errors raised by the pack and bank designers.
///
/// These cover invalid inputs only. Advisory conditions (unknown chemistry,
/// topology mismatch, safety-ceiling violations) never fail a calculation;
/// they are carried in the successful result instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignError {
    #[error("Invalid connection type: {label}")]
    UnknownConnection { label: String },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-finite value: {what}")]
    NonFinite { what: &'static str },
}

pub type DesignResult<T> = Result<T, DesignError>;

/// Ensure a value is finite, returning DesignError if not.
pub(crate) fn check_finite(value: f64, what: &'static str) -> DesignResult<()> {
    ensure_finite(value, what).map_err(|_| DesignError::NonFinite { what })?;
    Ok(())
}

impl From<DesignError> for BdError {
    fn from(e: DesignError) -> Self {
        match e {
            DesignError::UnknownConnection { label } => BdError::InvalidInput {
                message: format!("Invalid connection type: {label}"),
            },
            DesignError::InvalidArg { what } => BdError::InvalidArg { what },
            DesignError::NonFinite { what } => BdError::InvalidArg { what },
        }
    }
}
