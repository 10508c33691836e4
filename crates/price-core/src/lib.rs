//! # price-core: Pure Price Calculation
//!
//! Computes a final price from a base price, a tax rate and an optional
//! discount. Zero I/O: no logging, no database, no network.
//!
//! ## Modules
//!
//! - [`pricing`] - `calculate_price`, `price_breakdown`, strict mode, request DTO
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`rate`] - Tax/discount rates in basis points
//! - [`error`] - Domain error types
//! - [`validation`] - Input precondition checks
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, no hidden state
//! 2. **Integer Money**: amounts are cents (i64), rates are basis points
//! 3. **Explicit Errors**: a negative base price is a typed error, never a panic
//!
//! ## Example Usage
//!
//! ```rust
//! use price_core::{calculate_price, Money, PricingError, Rate};
//!
//! // (100 + 20) × (1 - 0.5) = 60
//! let total = calculate_price(
//!     Money::from_major(100),
//!     Rate::from_fraction(0.2),
//!     Some(Rate::from_fraction(0.5)),
//! )
//! .unwrap();
//! assert_eq!(total, Money::from_major(60));
//!
//! let err = calculate_price(Money::from_major(-10), Rate::from_fraction(0.1), None);
//! assert!(matches!(err, Err(PricingError::InvalidArgument(_))));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod rate;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{PricingError, PricingResult, ValidationError};
pub use money::Money;
pub use pricing::{calculate_price, calculate_price_strict, price_breakdown, PriceBreakdown, PriceRequest};
pub use rate::Rate;
