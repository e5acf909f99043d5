//! Pricing service functions with catalog and cache access.
//!
//! These wrap the pure calculators: resolve rates, check business limits,
//! stamp the quote with an id and record it for later confirmation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::cache::AppCache;
use crate::models::{is_currency_code, OfferCatalog};

use super::calculators::{calculate_quote, QuoteBreakdown};
use super::requests::CalculateQuoteRequest;

/// A quote handed out to the booking form
#[derive(Debug, Clone)]
pub struct IssuedQuote {
    pub id: Uuid,
    pub quoted_at: DateTime<Utc>,
    /// Catalog offer the rates came from, `None` for explicit-rate quotes
    pub offer_slug: Option<String>,
    pub currency: String,
    pub price_per_hour: Decimal,
    pub additional_person_price: Decimal,
    pub requested_hours: Decimal,
    pub requested_additional_people: i32,
    pub breakdown: QuoteBreakdown,
}

/// Pricing service error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum PricingError {
    #[error("No offer found with slug '{slug}'")]
    UnknownOffer { slug: String },

    #[error("Offer '{slug}' accepts at most {max} additional people, got {requested}")]
    PartyTooLarge {
        slug: String,
        max: i32,
        requested: i32,
    },

    #[error("{field} must not be negative (got {amount})")]
    InvalidRate { field: &'static str, amount: Decimal },

    #[error("Unsupported currency code '{currency}'")]
    InvalidCurrency { currency: String },

    #[error("Quote {quote_id} not found or expired")]
    QuoteNotFound { quote_id: Uuid },
}

impl PricingError {
    /// Stable identifier used in JSON error bodies
    pub fn error_type(&self) -> &'static str {
        match self {
            PricingError::UnknownOffer { .. } => "unknown_offer",
            PricingError::PartyTooLarge { .. } => "party_too_large",
            PricingError::InvalidRate { .. } => "invalid_rate",
            PricingError::InvalidCurrency { .. } => "invalid_currency",
            PricingError::QuoteNotFound { .. } => "quote_not_found",
        }
    }
}

/// Quote a catalog offer.
///
/// # Arguments
/// * `catalog` - Offer catalog holding the rates
/// * `cache` - Application cache the issued quote is recorded in
/// * `slug` - Offer slug
/// * `hours` - Requested duration (non-positive durations quote zero)
/// * `additional_people_count` - Additional participants (negative counts bill as zero)
pub async fn quote_offer(
    catalog: &OfferCatalog,
    cache: &AppCache,
    slug: &str,
    hours: Decimal,
    additional_people_count: i32,
) -> Result<Arc<IssuedQuote>, PricingError> {
    let offer = catalog
        .get(slug)
        .ok_or_else(|| PricingError::UnknownOffer {
            slug: slug.to_string(),
        })?;

    if additional_people_count > offer.max_additional_people {
        return Err(PricingError::PartyTooLarge {
            slug: offer.slug.clone(),
            max: offer.max_additional_people,
            requested: additional_people_count,
        });
    }

    let quote = issue_quote(
        Some(offer.slug.clone()),
        &offer.currency,
        offer.price_per_hour,
        hours,
        offer.additional_person_price,
        additional_people_count,
    );

    cache.insert_quote(quote.clone()).await;
    info!(
        "Issued quote {} for offer {}: {} {}",
        quote.id, slug, quote.breakdown.total, quote.currency
    );

    Ok(quote)
}

/// Quote a booking from explicit rates.
///
/// Rates are rejected when negative; duration and party size are clamped by
/// the calculator instead.
pub async fn quote_custom(
    cache: &AppCache,
    default_currency: &str,
    request: &CalculateQuoteRequest,
) -> Result<Arc<IssuedQuote>, PricingError> {
    if request.price_per_hour < Decimal::ZERO {
        return Err(PricingError::InvalidRate {
            field: "price_per_hour",
            amount: request.price_per_hour,
        });
    }
    if request.additional_person_price < Decimal::ZERO {
        return Err(PricingError::InvalidRate {
            field: "additional_person_price",
            amount: request.additional_person_price,
        });
    }

    let currency = request.currency.as_deref().unwrap_or(default_currency);
    if !is_currency_code(currency) {
        return Err(PricingError::InvalidCurrency {
            currency: currency.to_string(),
        });
    }

    let quote = issue_quote(
        None,
        currency,
        request.price_per_hour,
        request.hours,
        request.additional_person_price,
        request.additional_people_count,
    );

    cache.insert_quote(quote.clone()).await;
    info!(
        "Issued custom quote {}: {} {}",
        quote.id, quote.breakdown.total, quote.currency
    );

    Ok(quote)
}

/// Fetch a previously issued quote
pub async fn get_quote(cache: &AppCache, quote_id: Uuid) -> Result<Arc<IssuedQuote>, PricingError> {
    match cache.get_quote(&quote_id).await {
        Some(quote) => {
            debug!("Cache HIT for quote: {}", quote_id);
            Ok(quote)
        }
        None => {
            debug!("Cache MISS for quote: {}", quote_id);
            Err(PricingError::QuoteNotFound { quote_id })
        }
    }
}

fn issue_quote(
    offer_slug: Option<String>,
    currency: &str,
    price_per_hour: Decimal,
    hours: Decimal,
    additional_person_price: Decimal,
    additional_people_count: i32,
) -> Arc<IssuedQuote> {
    Arc::new(IssuedQuote {
        id: Uuid::new_v4(),
        quoted_at: Utc::now(),
        offer_slug,
        currency: currency.to_string(),
        price_per_hour,
        additional_person_price,
        requested_hours: hours,
        requested_additional_people: additional_people_count,
        breakdown: calculate_quote(
            price_per_hour,
            hours,
            additional_person_price,
            additional_people_count,
        ),
    })
}
