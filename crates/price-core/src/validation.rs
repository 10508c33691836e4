//! # Validation Module
//!
//! Precondition checks for pricing inputs.
//!
//! ## Which Checks Run When
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  calculate_price          → validate_base_price                        │
//! │                                                                         │
//! │  calculate_price_strict   → validate_base_price                        │
//! │                           → validate_tax_rate                          │
//! │                           → validate_discount                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The default path only rejects a negative base price. Negative tax rates
//! and discounts of 100% or more are accepted there and only refused by the
//! strict path.

use crate::error::ValidationError;
use crate::money::Money;
use crate::rate::{Rate, BPS_PER_UNIT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a base price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use price_core::money::Money;
/// use price_core::validation::validate_base_price;
///
/// assert!(validate_base_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_base_price(Money::zero()).is_ok());
/// assert!(validate_base_price(Money::from_cents(-1)).is_err());
/// ```
pub fn validate_base_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a tax rate (strict mode).
///
/// ## Rules
/// - Must be non-negative; no upper bound
pub fn validate_tax_rate(rate: Rate) -> ValidationResult<()> {
    if rate.bps() < 0 {
        return Err(ValidationError::Negative {
            field: "tax_rate".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount rate (strict mode).
///
/// ## Rules
/// - Must lie in `[0, 1)`, i.e. 0..=9999 basis points
pub fn validate_discount(rate: Rate) -> ValidationResult<()> {
    if rate.bps() < 0 || rate.bps() >= BPS_PER_UNIT {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: (BPS_PER_UNIT - 1) as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
