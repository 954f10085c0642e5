//! Error types for Bridgefee

use std::fmt;

use thiserror::Error;

/// Core errors that can occur in Bridgefee
#[derive(Debug, Error)]
pub enum Error {
    #[error("Reconciliation error: {0}")]
    Reconcile(#[from] ReconcileError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Leg field named in validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegField {
    SendingAssetId,
    SendingAmount,
    TotalAmount,
    FeeAmount,
    FeePercentage,
    BridgeFee,
}

impl LegField {
    /// Field name as it appears in leg JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SendingAssetId => "sendingAssetId",
            Self::SendingAmount => "sendingAmount",
            Self::TotalAmount => "totalAmount",
            Self::FeeAmount => "feeAmount",
            Self::FeePercentage => "feePercentage",
            Self::BridgeFee => "bridgeFee",
        }
    }
}

impl fmt::Display for LegField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fee reconciliation errors.
///
/// Either kind aborts the whole batch; partial results are never returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    #[error("Leg batch is empty")]
    EmptyBatch,

    #[error("Invalid leg {index} ({field}): {reason}")]
    InvalidLeg {
        index: usize,
        field: LegField,
        reason: String,
    },

    #[error("Mode requests {legs} legs, at most {max} allowed")]
    TooManyLegs { legs: usize, max: usize },

    #[error("Fee denominator must be positive, got {denominator}")]
    InvalidDenominator { denominator: i64 },
}

impl ReconcileError {
    pub fn invalid_leg(index: usize, field: LegField, reason: impl Into<String>) -> Self {
        Self::InvalidLeg {
            index,
            field,
            reason: reason.into(),
        }
    }

    /// Get an HTTP-friendly error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyBatch => "empty_batch",
            Self::InvalidLeg { .. } => "invalid_leg",
            Self::TooManyLegs { .. } => "too_many_legs",
            Self::InvalidDenominator { .. } => "invalid_denominator",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::EmptyBatch | Self::InvalidLeg { .. } | Self::TooManyLegs { .. } => 400,
            // Denominator comes from server config, not the request
            Self::InvalidDenominator { .. } => 500,
        }
    }
}

/// Result type alias for Bridgefee operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconcile_error_codes() {
        let err = ReconcileError::EmptyBatch;
        assert_eq!(err.error_code(), "empty_batch");
        assert_eq!(err.status_code(), 400);

        let err = ReconcileError::invalid_leg(2, LegField::FeePercentage, "150000 > 100000");
        assert_eq!(err.error_code(), "invalid_leg");
        assert_eq!(err.status_code(), 400);

        let err = ReconcileError::TooManyLegs { legs: 300, max: 256 };
        assert_eq!(err.error_code(), "too_many_legs");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), "Mode requests 300 legs, at most 256 allowed");
    }

    #[test]
    fn test_invalid_leg_message_names_index_and_field() {
        let err = ReconcileError::invalid_leg(3, LegField::TotalAmount, "must be >= 0, got -1");
        assert_eq!(
            err.to_string(),
            "Invalid leg 3 (totalAmount): must be >= 0, got -1"
        );
    }
}
