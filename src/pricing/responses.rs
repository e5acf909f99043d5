//! Response DTOs for pricing API endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::cache::CacheStats;
use crate::models::Offer;

use super::calculators::normalize;
use super::services::IssuedQuote;

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal, currency: &str) -> Self {
        Self {
            amount,
            currency: currency.to_string(),
        }
    }
}

/// Response for a booking quote
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote_id: Uuid,
    pub quoted_at: DateTime<Utc>,
    pub offer_slug: Option<String>,
    pub price_per_hour: MoneyResponse,
    pub additional_person_price: MoneyResponse,
    #[serde(with = "rust_decimal::serde::str")]
    pub hours: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub billed_hours: Decimal,
    pub additional_people_count: i32,
    pub billed_additional_people: i32,
    pub hourly_rate: MoneyResponse,
    pub base: MoneyResponse,
    pub extra: MoneyResponse,
    pub total: MoneyResponse,
    /// Whole, non-negative total for display
    pub display_total: MoneyResponse,
}

impl From<&IssuedQuote> for QuoteResponse {
    fn from(quote: &IssuedQuote) -> Self {
        let currency = quote.currency.as_str();
        let breakdown = &quote.breakdown;

        Self {
            quote_id: quote.id,
            quoted_at: quote.quoted_at,
            offer_slug: quote.offer_slug.clone(),
            price_per_hour: MoneyResponse::new(quote.price_per_hour, currency),
            additional_person_price: MoneyResponse::new(quote.additional_person_price, currency),
            hours: quote.requested_hours,
            billed_hours: breakdown.billed_hours,
            additional_people_count: quote.requested_additional_people,
            billed_additional_people: breakdown.extra_people,
            hourly_rate: MoneyResponse::new(breakdown.hourly_rate, currency),
            base: MoneyResponse::new(breakdown.base, currency),
            extra: MoneyResponse::new(breakdown.extra, currency),
            total: MoneyResponse::new(breakdown.total, currency),
            display_total: MoneyResponse::new(normalize(breakdown.total), currency),
        }
    }
}

/// Response for amount normalization
#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub value: Decimal,
}

/// Public view of a catalog offer
#[derive(Debug, Serialize)]
pub struct OfferResponse {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub price_per_hour: MoneyResponse,
    pub additional_person_price: MoneyResponse,
    pub max_additional_people: i32,
}

impl From<&Offer> for OfferResponse {
    fn from(offer: &Offer) -> Self {
        Self {
            slug: offer.slug.clone(),
            name: offer.name.clone(),
            description: offer.description.clone(),
            price_per_hour: MoneyResponse::new(offer.price_per_hour, &offer.currency),
            additional_person_price: MoneyResponse::new(
                offer.additional_person_price,
                &offer.currency,
            ),
            max_additional_people: offer.max_additional_people,
        }
    }
}

/// Response for the health endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub offers: usize,
    pub cache: CacheStats,
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
