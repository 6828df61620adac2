//! Unicode decoding for domain names.
//!
//! Provides the decode-to-Unicode seam used by the validation pipeline.
//! The decoder is injected so it can be swapped for a test double without
//! pulling a particular IDNA implementation into every test.

use std::collections::HashMap;

use thiserror::Error;

/// Failure to decode a punycode-encoded domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct DecodeError(pub String);

/// Domain-to-Unicode decoder interface.
pub trait LabelDecoder: Send + Sync {
    /// Decode any punycode-encoded labels (`xn--...`) to their Unicode form.
    ///
    /// Labels already in Unicode pass through unchanged. Returns an error
    /// if any label is invalid punycode.
    fn decode(&self, domain: &str) -> Result<String, DecodeError>;
}

/// UTS #46 decoder backed by the `idna` crate.
pub struct IdnaDecoder;

impl IdnaDecoder {
    /// Create a new IDNA decoder.
    pub fn new() -> Self {
        Self
    }
}

impl Default for IdnaDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelDecoder for IdnaDecoder {
    fn decode(&self, domain: &str) -> Result<String, DecodeError> {
        let (unicode, result) = idna::domain_to_unicode(domain);
        if result.is_err() {
            return Err(DecodeError(
                "invalid punycode or disallowed code points".to_string(),
            ));
        }
        Ok(unicode)
    }
}

/// Nil decoder that passes domains through unchanged apart from case folding.
pub struct NilDecoder;

impl NilDecoder {
    /// Create a new nil decoder.
    pub fn new() -> Self {
        Self
    }
}

impl Default for NilDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelDecoder for NilDecoder {
    fn decode(&self, domain: &str) -> Result<String, DecodeError> {
        Ok(domain.to_lowercase())
    }
}

/// Static decoder with predefined mappings, for tests.
///
/// Unmapped domains fall back to case-folded passthrough.
pub struct StaticDecoder {
    mappings: HashMap<String, String>,
}

impl StaticDecoder {
    /// Create a new empty static decoder.
    pub fn new() -> Self {
        Self {
            mappings: HashMap::new(),
        }
    }

    /// Add a mapping for a domain.
    pub fn add(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.mappings.insert(from.into(), to.into());
    }

    /// Add a mapping and return self for chaining.
    pub fn with_mapping(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.add(from, to);
        self
    }
}

impl Default for StaticDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelDecoder for StaticDecoder {
    fn decode(&self, domain: &str) -> Result<String, DecodeError> {
        match self.mappings.get(domain) {
            Some(mapped) => Ok(mapped.clone()),
            None => Ok(domain.to_lowercase()),
        }
    }
}
