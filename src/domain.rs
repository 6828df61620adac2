use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::decoder::LabelDecoder;
use crate::error::{Result, ValidationError};
use crate::suffix::SuffixTable;

/// A domain is a single token: non-empty, no whitespace anywhere.
/// Label structure (empty labels, edge dots) is checked separately.
static DOMAIN_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+$").expect("DOMAIN_SHAPE: hardcoded regex is invalid"));

/// A DNS domain name proven to sit strictly below an included public suffix.
///
/// Constructed only through [`DomainName::parse`] (or
/// [`DomainValidator::parse`](crate::DomainValidator::parse)), which runs
/// the full syntax / decode / suffix-classification pipeline. The value is
/// stored in Unicode form and never re-encoded to punycode. Equality and
/// hashing are defined over the domain string alone.
#[derive(Clone)]
pub struct DomainName {
    value: String,
    table: Arc<SuffixTable>,
}

impl DomainName {
    /// Validate `raw` against the suffix table and construct the value.
    ///
    /// Stages, each short-circuiting on failure:
    /// 1. shape check (empty, whitespace, empty labels, edge dots),
    /// 2. decode to Unicode via `decoder`, then re-check the shape (UTS #46
    ///    maps ideographic full stops to `.`, which can surface empty labels
    ///    the raw check could not see),
    /// 3. suffix classification: the decoded domain must sit strictly below
    ///    an included suffix and must not match any excluded entry.
    pub fn parse(
        raw: &str,
        table: Arc<SuffixTable>,
        decoder: &dyn LabelDecoder,
    ) -> Result<Self> {
        check_shape(raw)?;

        let decoded = decoder
            .decode(raw)
            .map_err(|e| ValidationError::DecodeFailure {
                input: raw.to_string(),
                message: e.to_string(),
            })?;

        check_shape(&decoded)?;

        let suffix = table
            .longest_included_suffix(&decoded)
            .ok_or_else(|| ValidationError::NoAllowedSuffix(decoded.clone()))?;

        // A bare public suffix is not a registrable name. It is accepted
        // only when a shorter included entry is a proper ancestor (e.g.
        // "co.uk" below "uk").
        if suffix.len() == decoded.len() && table.included_ancestor(&decoded).is_none() {
            return Err(ValidationError::NoAllowedSuffix(decoded));
        }

        if table.is_excluded(&decoded) {
            return Err(ValidationError::ExcludedSuffix(decoded));
        }

        Ok(Self {
            value: decoded,
            table,
        })
    }

    /// Check if the domain sits exactly one label below its matched suffix.
    pub fn is_direct_tld_child(&self) -> bool {
        self.table.is_direct_child_of_suffix(&self.value)
    }

    /// The validated domain string in Unicode form.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

fn check_shape(domain: &str) -> Result<()> {
    if !DOMAIN_SHAPE.is_match(domain)
        || domain.contains("..")
        || domain.starts_with('.')
        || domain.ends_with('.')
    {
        return Err(ValidationError::MalformedSyntax(domain.to_string()));
    }
    Ok(())
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl fmt::Debug for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DomainName({:?})", self.value)
    }
}

impl PartialEq for DomainName {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for DomainName {}

impl Hash for DomainName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
