//! In-memory caching using moka
//!
//! Holds the quotes issued to the booking form so a later request can confirm
//! the total the customer saw. Quotes are cheap to recompute, so losing the
//! cache on restart only means the form asks for a fresh quote.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::debug;
use uuid::Uuid;

use crate::pricing::IssuedQuote;

/// Application cache holding issued quotes
#[derive(Clone)]
pub struct AppCache {
    /// Issued quotes (quote_id -> IssuedQuote)
    pub quotes: Cache<Uuid, Arc<IssuedQuote>>,
}

impl AppCache {
    /// Create a new cache instance with the given capacity and TTL
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        Self {
            quotes: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            quotes_size: self.quotes.entry_count(),
        }
    }

    /// Store an issued quote
    pub async fn insert_quote(&self, quote: Arc<IssuedQuote>) {
        self.quotes.insert(quote.id, quote).await;
    }

    /// Fetch an issued quote by id, if it has not expired
    pub async fn get_quote(&self, id: &Uuid) -> Option<Arc<IssuedQuote>> {
        self.quotes.get(id).await
    }
}

impl Default for AppCache {
    fn default() -> Self {
        // 10k quotes, 1 hour TTL
        Self::new(10_000, Duration::from_secs(60 * 60))
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub quotes_size: u64,
}

/// Start background cache maintenance
///
/// moka evicts lazily; this flushes pending evictions every minute so the
/// reported entry counts stay accurate on an idle server.
pub async fn start_cache_maintenance(cache: AppCache) {
    let mut interval = interval(Duration::from_secs(60));
    loop {
        interval.tick().await;
        cache.quotes.run_pending_tasks().await;
        debug!("Cache maintenance complete. Stats: {:?}", cache.stats());
    }
}
