//! # Error Types
//!
//! Domain-specific error types for price-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  PricingError                                                          │
//! │  └── InvalidArgument(ValidationError)                                  │
//! │        ├── Negative    - "price cannot be negative"                    │
//! │        └── OutOfRange  - strict-mode rate checks                       │
//! │                                                                         │
//! │  Flow: ValidationError → PricingError → caller                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors are never caught inside this crate. They are returned to the
//! caller as-is.

use thiserror::Error;

// =============================================================================
// Pricing Error
// =============================================================================

/// Errors returned by the pricing operations.
///
/// There is exactly one kind: an argument broke a precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// An input failed validation.
    ///
    /// ## When This Occurs
    /// - `base_price` is negative (always checked)
    /// - `tax_rate` or `discount` out of range (strict mode only)
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value must be zero or greater.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Numeric value is out of range (inclusive bounds).
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================
