//! Booking pricing module.
//!
//! Computes lesson and course totals from hourly rates, duration and party
//! size, and serves them to the booking form over HTTP/JSON.

pub mod calculators;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{calculate_quote, compute_total, normalize, QuoteBreakdown};
pub use routes::router;
pub use services::{IssuedQuote, PricingError};
