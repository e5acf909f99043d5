//! Domain models

pub mod offer;

pub use offer::{is_currency_code, CatalogError, Offer, OfferCatalog};
