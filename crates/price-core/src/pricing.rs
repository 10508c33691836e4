//! # Pricing Module
//!
//! The price calculation: base price, plus tax, minus an optional discount.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  base_price ──► validate_base_price ──► Err(InvalidArgument) if < 0    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  tax      = base × tax_rate            (rounded to the cent)           │
//! │  subtotal = base + tax                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  discount > 0 ?                                                         │
//! │       ├── yes → total = subtotal × (1 - discount)  (rounded)           │
//! │       └── no  → total = subtotal                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tax rates and discounts are not range-checked here. A negative tax rate
//! lowers the price; a discount of 100% or more gives zero or a negative
//! total. [`calculate_price_strict`] refuses both.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::PricingResult;
use crate::money::{mul_rate_wide, Money};
use crate::rate::Rate;
use crate::validation::{validate_base_price, validate_discount, validate_tax_rate};

// =============================================================================
// Price Breakdown
// =============================================================================

/// Every intermediate amount of one price calculation.
///
/// `subtotal == base + tax` and `total == subtotal - discount` whenever no
/// field saturates at the i64 bounds. Each field is narrowed independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceBreakdown {
    /// Price before tax and discount.
    pub base: Money,
    /// Tax on the base price.
    pub tax: Money,
    /// Base plus tax.
    pub subtotal: Money,
    /// Amount taken off the subtotal. Zero when no discount applies.
    pub discount: Money,
    /// Final price.
    pub total: Money,
}

/// Computes the full breakdown of a price.
///
/// ## Example
/// ```rust
/// use price_core::money::Money;
/// use price_core::pricing::price_breakdown;
/// use price_core::rate::Rate;
///
/// let b = price_breakdown(
///     Money::from_major(100),
///     Rate::from_fraction(0.2),
///     Some(Rate::from_fraction(0.5)),
/// )
/// .unwrap();
///
/// assert_eq!(b.tax, Money::from_major(20));
/// assert_eq!(b.subtotal, Money::from_major(120));
/// assert_eq!(b.discount, Money::from_major(60));
/// assert_eq!(b.total, Money::from_major(60));
/// ```
pub fn price_breakdown(
    base_price: Money,
    tax_rate: Rate,
    discount: Option<Rate>,
) -> PricingResult<PriceBreakdown> {
    validate_base_price(base_price)?;

    // Chained in i128 so an oversized subtotal still discounts exactly.
    let base = base_price.cents() as i128;
    let tax = mul_rate_wide(base, tax_rate.bps() as i128);
    let subtotal = base + tax;

    let total = match discount {
        Some(rate) if rate.is_positive() => mul_rate_wide(subtotal, rate.complement().bps() as i128),
        _ => subtotal,
    };

    Ok(PriceBreakdown {
        base: base_price,
        tax: Money::from_wide(tax),
        subtotal: Money::from_wide(subtotal),
        discount: Money::from_wide(subtotal - total),
        total: Money::from_wide(total),
    })
}

/// Computes the final price of an item.
///
/// `discount` of `None` behaves exactly like `Some(Rate::zero())`.
///
/// ## Rounding
/// Each step rounds to the cent, half away from zero: the tax first, then
/// the discounted total. This can differ by one cent from rounding the exact
/// `(base + base × tax) × (1 - discount)` once. For example 1 cent at 50% tax
/// with a 66.67% discount is exactly 0.49995 cents, but the tax rounds to
/// 1 cent and the result is 1 cent. Intermediates are never narrowed, so only
/// the final value saturates at the i64 bounds.
///
/// ## Errors
/// [`PricingError::InvalidArgument`](crate::error::PricingError::InvalidArgument)
/// when `base_price` is negative. Every other input combination yields a
/// value.
///
/// ## Example
/// ```rust
/// use price_core::money::Money;
/// use price_core::pricing::calculate_price;
/// use price_core::rate::Rate;
///
/// let total = calculate_price(Money::from_major(100), Rate::from_fraction(0.1), None).unwrap();
/// assert_eq!(total, Money::from_major(110));
///
/// assert!(calculate_price(Money::from_major(-10), Rate::from_fraction(0.1), None).is_err());
/// ```
pub fn calculate_price(
    base_price: Money,
    tax_rate: Rate,
    discount: Option<Rate>,
) -> PricingResult<Money> {
    price_breakdown(base_price, tax_rate, discount).map(|b| b.total)
}

/// Like [`calculate_price`], but also rejects a negative tax rate and a
/// discount outside `[0, 1)`.
pub fn calculate_price_strict(
    base_price: Money,
    tax_rate: Rate,
    discount: Option<Rate>,
) -> PricingResult<Money> {
    validate_base_price(base_price)?;
    validate_tax_rate(tax_rate)?;
    if let Some(rate) = discount {
        validate_discount(rate)?;
    }

    calculate_price(base_price, tax_rate, discount)
}

// =============================================================================
// Request DTO
// =============================================================================

/// Wire form of a price calculation request.
///
/// ## JSON
/// ```json
/// { "base_price_cents": 10000, "tax_rate_bps": 1000 }
/// { "base_price_cents": 10000, "tax_rate_bps": 2000, "discount_bps": 5000 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceRequest {
    pub base_price_cents: i64,
    pub tax_rate_bps: i32,
    /// Omitted means no discount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub discount_bps: Option<i32>,
}

impl PriceRequest {
    #[inline]
    pub fn base_price(&self) -> Money {
        Money::from_cents(self.base_price_cents)
    }

    #[inline]
    pub fn tax_rate(&self) -> Rate {
        Rate::from_bps(self.tax_rate_bps)
    }

    #[inline]
    pub fn discount(&self) -> Option<Rate> {
        self.discount_bps.map(Rate::from_bps)
    }

    /// Runs [`calculate_price`] on this request.
    pub fn calculate(&self) -> PricingResult<Money> {
        calculate_price(self.base_price(), self.tax_rate(), self.discount())
    }

    /// Runs [`price_breakdown`] on this request.
    pub fn breakdown(&self) -> PricingResult<PriceBreakdown> {
        price_breakdown(self.base_price(), self.tax_rate(), self.discount())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PricingError, ValidationError};

    fn dollars(d: i64) -> Money {
        Money::from_major(d)
    }

    fn frac(f: f64) -> Rate {
        Rate::from_fraction(f)
    }

    #[test]
    fn test_basic_price() {
        assert_eq!(calculate_price(dollars(100), frac(0.1), None), Ok(dollars(110)));
    }

    #[test]
    fn test_with_zero_tax() {
        assert_eq!(calculate_price(dollars(50), frac(0.0), None), Ok(dollars(50)));
    }

    #[test]
    fn test_negative_price() {
        let err = calculate_price(dollars(-10), frac(0.1), None).unwrap_err();
        assert!(matches!(
            err,
            PricingError::InvalidArgument(ValidationError::Negative { .. })
        ));
        assert_eq!(err.to_string(), "Invalid argument: price cannot be negative");
    }

    #[test]
    fn test_with_discount() {
        // (100 + 20) × (1 - 0.5) = 60
        assert_eq!(
            calculate_price(dollars(100), frac(0.2), Some(frac(0.5))),
            Ok(dollars(60))
        );
    }

    #[test]
    fn test_negative_price_rejected_for_any_rates() {
        for tax in [-5000, 0, 1000, 30000] {
            for discount in [None, Some(-1000), Some(0), Some(5000), Some(20000)] {
                let result = calculate_price(
                    Money::from_cents(-1),
                    Rate::from_bps(tax),
                    discount.map(Rate::from_bps),
                );
                assert!(matches!(result, Err(PricingError::InvalidArgument(_))));
            }
        }
    }

    #[test]
    fn test_zero_discount_same_as_omitted() {
        for cents in [0, 1, 999, 10000, 123_456] {
            let base = Money::from_cents(cents);
            let rate = Rate::from_bps(825);
            assert_eq!(
                calculate_price(base, rate, Some(Rate::zero())),
                calculate_price(base, rate, None)
            );
        }
    }

    #[test]
    fn test_non_positive_discount_is_ignored() {
        let with = calculate_price(dollars(100), frac(0.1), Some(frac(-0.3)));
        assert_eq!(with, Ok(dollars(110)));
    }

    #[test]
    fn test_no_discount_never_below_base() {
        for cents in [0, 1, 49, 50, 1099, 10000] {
            for bps in [0, 1, 825, 1000, 10000] {
                let base = Money::from_cents(cents);
                let total = calculate_price(base, Rate::from_bps(bps), None).unwrap();
                assert!(total >= base);
            }
        }
    }

    #[test]
    fn test_discount_decreases_total() {
        let base = dollars(100);
        let tax = frac(0.2);
        let totals: Vec<Money> = (0..10)
            .map(|step| calculate_price(base, tax, Some(Rate::from_bps(step * 1000))).unwrap())
            .collect();

        for pair in totals.windows(2) {
            assert!(pair[1] < pair[0], "{} should be below {}", pair[1], pair[0]);
        }
    }

    #[test]
    fn test_idempotent() {
        let first = calculate_price(Money::from_cents(1099), Rate::from_bps(825), Some(frac(0.15)));
        let second = calculate_price(Money::from_cents(1099), Rate::from_bps(825), Some(frac(0.15)));
        assert_eq!(first, second);
    }

    #[test]
    fn test_negative_tax_rate_flows_through() {
        assert_eq!(calculate_price(dollars(100), frac(-0.1), None), Ok(dollars(90)));
    }

    #[test]
    fn test_full_or_excess_discount_not_rejected() {
        assert_eq!(
            calculate_price(dollars(100), frac(0.1), Some(frac(1.0))),
            Ok(Money::zero())
        );
        assert_eq!(
            calculate_price(dollars(100), frac(0.1), Some(frac(1.5))),
            Ok(dollars(-55))
        );
    }

    #[test]
    fn test_rounding_to_cents() {
        // $10.99 at 8.25% = 0.906675 → $0.91, subtotal $11.90
        // $11.90 × 0.85 = 10.115 → $10.12
        let b = price_breakdown(Money::from_cents(1099), Rate::from_bps(825), Some(frac(0.15)))
            .unwrap();
        assert_eq!(b.tax.cents(), 91);
        assert_eq!(b.subtotal.cents(), 1190);
        assert_eq!(b.total.cents(), 1012);
        assert_eq!(b.discount.cents(), 178);
    }

    #[test]
    fn test_each_step_rounds_to_cents() {
        // tax 0.5 → 1, subtotal 2, 2 × 0.3333 = 0.6666 → 1
        let b = price_breakdown(Money::from_cents(1), Rate::from_bps(5000), Some(Rate::from_bps(6667)))
            .unwrap();
        assert_eq!(b.tax.cents(), 1);
        assert_eq!(b.subtotal.cents(), 2);
        assert_eq!(b.total.cents(), 1);
    }

    #[test]
    fn test_huge_base_discounts_exact_subtotal() {
        // i64::MAX × 1.1 overflows i64, but halving it fits again.
        let total = calculate_price(
            Money::from_cents(i64::MAX),
            Rate::from_bps(1000),
            Some(Rate::from_bps(5000)),
        )
        .unwrap();
        assert_eq!(total.cents(), 5_072_854_620_270_126_694);
    }

    #[test]
    fn test_huge_base_saturates_only_final_fields() {
        let b = price_breakdown(Money::from_cents(i64::MAX), Rate::from_bps(1000), None).unwrap();
        assert_eq!(b.tax.cents(), 922_337_203_685_477_581);
        assert_eq!(b.subtotal.cents(), i64::MAX);
        assert_eq!(b.total.cents(), i64::MAX);
        assert!(b.discount.is_zero());

        let extreme = calculate_price(
            Money::from_cents(i64::MAX),
            Rate::from_bps(i32::MAX),
            Some(Rate::from_bps(i32::MAX)),
        )
        .unwrap();
        assert_eq!(extreme.cents(), i64::MIN);
    }

    #[test]
    fn test_value_types_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Money>();
        assert_send_sync::<Rate>();
        assert_send_sync::<PriceBreakdown>();
        assert_send_sync::<PriceRequest>();
        assert_send_sync::<PricingError>();
    }

    #[test]
    fn test_breakdown_invariants() {
        let b = price_breakdown(dollars(250), frac(0.07), Some(frac(0.25))).unwrap();
        assert_eq!(b.base, dollars(250));
        assert_eq!(b.subtotal, b.base + b.tax);
        assert_eq!(b.total, b.subtotal - b.discount);
        assert_eq!(
            Ok(b.total),
            calculate_price(dollars(250), frac(0.07), Some(frac(0.25)))
        );
    }

    #[test]
    fn test_breakdown_without_discount() {
        let b = price_breakdown(dollars(50), frac(0.0), None).unwrap();
        assert!(b.tax.is_zero());
        assert!(b.discount.is_zero());
        assert_eq!(b.total, dollars(50));
    }

    #[test]
    fn test_strict_accepts_valid_input() {
        assert_eq!(
            calculate_price_strict(dollars(100), frac(0.2), Some(frac(0.5))),
            Ok(dollars(60))
        );
        assert_eq!(calculate_price_strict(dollars(50), frac(0.0), None), Ok(dollars(50)));
    }

    #[test]
    fn test_strict_rejects_out_of_range_rates() {
        let negative_tax = calculate_price_strict(dollars(100), frac(-0.1), None).unwrap_err();
        assert_eq!(negative_tax.to_string(), "Invalid argument: tax_rate cannot be negative");

        let full_discount = calculate_price_strict(dollars(100), frac(0.1), Some(frac(1.0)));
        assert!(matches!(
            full_discount,
            Err(PricingError::InvalidArgument(ValidationError::OutOfRange { .. }))
        ));

        let negative_discount = calculate_price_strict(dollars(100), frac(0.1), Some(frac(-0.1)));
        assert!(negative_discount.is_err());

        assert!(calculate_price_strict(dollars(-1), frac(0.1), None).is_err());
    }

    #[test]
    fn test_request_from_json_without_discount() {
        let req: PriceRequest =
            serde_json::from_str(r#"{"base_price_cents":10000,"tax_rate_bps":1000}"#).unwrap();
        assert_eq!(req.discount(), None);
        assert_eq!(req.calculate(), Ok(Money::from_cents(11000)));
    }

    #[test]
    fn test_request_with_discount() {
        let req = PriceRequest {
            base_price_cents: 10000,
            tax_rate_bps: 2000,
            discount_bps: Some(5000),
        };
        assert_eq!(req.calculate(), Ok(Money::from_cents(6000)));
        assert_eq!(req.breakdown().unwrap().discount, Money::from_cents(6000));
    }

    #[test]
    fn test_request_negative_price() {
        let req = PriceRequest {
            base_price_cents: -1000,
            tax_rate_bps: 1000,
            discount_bps: None,
        };
        assert!(req.calculate().is_err());
    }

    #[test]
    fn test_request_serialization_omits_missing_discount() {
        let req = PriceRequest {
            base_price_cents: 5000,
            tax_rate_bps: 0,
            discount_bps: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"base_price_cents":5000,"tax_rate_bps":0}"#);
    }

    #[test]
    fn test_breakdown_serializes_cents() {
        let b = price_breakdown(dollars(100), frac(0.1), None).unwrap();
        let value = serde_json::to_value(b).unwrap();
        assert_eq!(value["total"], 11000);
        assert_eq!(value["discount"], 0);
    }
}
