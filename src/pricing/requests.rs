//! Request DTOs for pricing API endpoints.
//!
//! Decimal fields accept either JSON numbers or strings.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Request to quote a booking from explicit rates
#[derive(Debug, Deserialize)]
pub struct CalculateQuoteRequest {
    pub price_per_hour: Decimal,
    pub hours: Decimal,
    #[serde(default)]
    pub additional_person_price: Decimal,
    #[serde(default)]
    pub additional_people_count: i32,
    /// Falls back to the configured default currency
    #[serde(default)]
    pub currency: Option<String>,
}

/// Request to quote a catalog offer
#[derive(Debug, Deserialize)]
pub struct OfferQuoteRequest {
    pub hours: Decimal,
    #[serde(default)]
    pub additional_people_count: i32,
}

/// Request to normalize an amount for display
#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    pub value: Decimal,
}
