//! Booking and pricing service for the fly-fishing school website.
//!
//! The public site's booking form asks this service for quotes: the total
//! price of a lesson given its hourly rate, duration and number of
//! additional participants. Offers (private lessons, clinics, guided days)
//! come from a JSON catalog; issued quotes are kept in memory for a while so
//! the booking flow can confirm the total the customer was shown.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub mod cache;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod pricing;
pub mod routes;

use cache::AppCache;
use config::Config;
use models::OfferCatalog;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<OfferCatalog>,
    pub cache: AppCache,
}

impl AppState {
    pub fn new(config: Config, catalog: OfferCatalog) -> Self {
        let cache = AppCache::new(config.quote_cache_capacity, config.quote_cache_ttl);

        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            cache,
        }
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(state.config.cors_allow_origin.as_deref());

    Router::new()
        .route("/health", get(routes::health::health))
        .merge(routes::offers::router())
        .nest("/api/pricing", pricing::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let allow_origin = match origin.and_then(|o| o.parse::<HeaderValue>().ok()) {
        Some(origin) => AllowOrigin::exact(origin),
        None => AllowOrigin::any(),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60))
}
