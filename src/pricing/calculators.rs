//! Core pricing calculation functions.
//!
//! Pure functions for booking price math - no cache or catalog access.
//! Inputs are never rejected here: non-positive durations and negative
//! party sizes are clamped so the booking form can call these on every keystroke.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Breakdown of a booking quote.
///
/// `total` is what [`compute_total`] returns; the other fields are the
/// intermediate values the booking form shows as line items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteBreakdown {
    /// Hours actually billed (zero when the requested duration was not positive)
    pub billed_hours: Decimal,
    /// Additional people after clamping negative counts to zero
    pub extra_people: i32,
    /// Combined hourly rate for the whole party
    pub hourly_rate: Decimal,
    /// `price_per_hour * hours`
    pub base: Decimal,
    /// `additional_person_price * hours * extra_people`
    pub extra: Decimal,
    pub total: Decimal,
}

impl QuoteBreakdown {
    fn empty() -> Self {
        Self {
            billed_hours: Decimal::ZERO,
            extra_people: 0,
            hourly_rate: Decimal::ZERO,
            base: Decimal::ZERO,
            extra: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

/// Calculate the full quote breakdown for a booking.
///
/// # Arguments
/// * `price_per_hour` - Base hourly price of the lesson
/// * `hours` - Requested duration; `<= 0` yields an all-zero quote
/// * `additional_person_price` - Hourly surcharge per additional participant
/// * `additional_people_count` - Additional participants; negative counts bill as zero
///
/// Arithmetic saturates at `Decimal::MAX` instead of panicking on overflow.
pub fn calculate_quote(
    price_per_hour: Decimal,
    hours: Decimal,
    additional_person_price: Decimal,
    additional_people_count: i32,
) -> QuoteBreakdown {
    if hours <= Decimal::ZERO {
        return QuoteBreakdown::empty();
    }

    let extra_people = additional_people_count.max(0);

    let base = price_per_hour.saturating_mul(hours);
    let extra = additional_person_price
        .saturating_mul(hours)
        .saturating_mul(Decimal::from(extra_people));
    let hourly_rate = price_per_hour
        .saturating_add(additional_person_price.saturating_mul(Decimal::from(extra_people)));

    QuoteBreakdown {
        billed_hours: hours,
        extra_people,
        hourly_rate,
        base,
        extra,
        total: base.saturating_add(extra),
    }
}

/// Compute a booking's total cost.
///
/// No currency rounding is applied; use [`normalize`] for display amounts.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use flyschool_web::pricing::compute_total;
///
/// assert_eq!(compute_total(dec!(80), dec!(2), dec!(20), 1), dec!(200));
/// assert_eq!(compute_total(dec!(100), dec!(0), dec!(50), 2), dec!(0));
/// assert_eq!(compute_total(dec!(60), dec!(3), dec!(10), -2), dec!(180));
/// ```
pub fn compute_total(
    price_per_hour: Decimal,
    hours: Decimal,
    additional_person_price: Decimal,
    additional_people_count: i32,
) -> Decimal {
    calculate_quote(
        price_per_hour,
        hours,
        additional_person_price,
        additional_people_count,
    )
    .total
}

/// Clamp an amount to a non-negative whole number for display.
///
/// Halves round up (`3.5 -> 4`); anything below zero becomes zero.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use flyschool_web::pricing::normalize;
///
/// assert_eq!(normalize(dec!(-5)), dec!(0));
/// assert_eq!(normalize(dec!(3.5)), dec!(4));
/// assert_eq!(normalize(dec!(3.4)), dec!(3));
/// ```
pub fn normalize(value: Decimal) -> Decimal {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .max(Decimal::ZERO)
}
