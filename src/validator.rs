//! Validation entry point.
//!
//! Bundles the shared suffix table, the injected Unicode decoder, and an
//! optional result cache into a single parse surface.

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;
use tracing::trace;

use crate::decoder::{IdnaDecoder, LabelDecoder};
use crate::domain::DomainName;
use crate::error::Result;
use crate::suffix::SuffixTable;

/// Default LRU cache size
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Validates untrusted domain strings against a shared suffix table.
///
/// The table is built once and shared read-only; the decoder defaults to
/// [`IdnaDecoder`] and can be swapped via [`with_decoder`](Self::with_decoder).
/// An opt-in LRU cache stores full parse outcomes keyed by the raw input,
/// rejections included: rejection is an expected result of validating
/// untrusted input, and a caller retrying the same bad string should not
/// pay for IDNA decoding twice.
pub struct DomainValidator {
    table: Arc<SuffixTable>,
    decoder: Box<dyn LabelDecoder>,
    cache: Option<Mutex<LruCache<String, Result<DomainName>>>>,
}

impl DomainValidator {
    /// Create a validator owning the given table, with the IDNA decoder
    /// and no cache.
    pub fn new(table: SuffixTable) -> Self {
        Self::with_shared_table(Arc::new(table))
    }

    /// Create a validator over an already-shared table.
    pub fn with_shared_table(table: Arc<SuffixTable>) -> Self {
        Self {
            table,
            decoder: Box::new(IdnaDecoder::new()),
            cache: None,
        }
    }

    /// Replace the Unicode decoder.
    pub fn with_decoder(mut self, decoder: impl LabelDecoder + 'static) -> Self {
        self.decoder = Box::new(decoder);
        self
    }

    /// Enable the result cache with the given capacity.
    pub fn with_cache(mut self, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::new(1).unwrap());
        self.cache = Some(Mutex::new(LruCache::new(capacity)));
        self
    }

    /// The shared suffix table.
    pub fn table(&self) -> &Arc<SuffixTable> {
        &self.table
    }

    /// Validate a raw domain string.
    pub fn parse(&self, raw: &str) -> Result<DomainName> {
        if let Some(ref cache) = self.cache {
            let mut cache = cache.lock();

            if let Some(cached) = cache.get(raw) {
                trace!(domain = raw, "validation cache hit");
                return cached.clone();
            }

            // Validate while holding the lock. Validation is cheap, and this
            // prevents cache stampede (multiple threads computing the same key).
            let result = DomainName::parse(raw, self.table.clone(), self.decoder.as_ref());
            cache.put(raw.to_string(), result.clone());
            return result;
        }

        DomainName::parse(raw, self.table.clone(), self.decoder.as_ref())
    }

    /// Clear the result cache, if enabled.
    pub fn clear_cache(&self) {
        if let Some(ref cache) = self.cache {
            cache.lock().clear();
        }
    }
}
