//! Core error types used across the system

use thiserror::Error;

use crate::identity::IdentityError;
use crate::rate::RateError;

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Rate error: {0}")]
    Rate(#[from] RateError),

    #[error("Identity error: {0}")]
    Identity(#[from] IdentityError),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_error_converts() {
        let error: CoreError = RateError::DivisionByZero.into();
        assert!(matches!(error, CoreError::Rate(RateError::DivisionByZero)));
    }

    #[test]
    fn test_identity_error_converts() {
        let error: CoreError = IdentityError::NotRegistered(4).into();
        assert_eq!(error.to_string(), "Identity error: Id 4 was never registered");
    }

    #[test]
    fn test_validation_helper() {
        let error = CoreError::validation("weight must not be negative");
        assert_eq!(error.to_string(), "Validation error: weight must not be negative");
    }
}
