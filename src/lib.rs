//! eTLD Guard - Public-suffix validation for DNS domain names
//!
//! This library validates and normalizes untrusted domain name strings
//! against a curated effective-TLD (public suffix) list:
//! - Syntax checking (whitespace, empty labels, edge dots)
//! - Punycode/IDNA decoding to Unicode (UTS #46)
//! - Longest-match suffix classification with explicit exclusions
//! - Direct-child-of-suffix queries
//!
//! A domain is accepted only when it sits strictly below an included public
//! suffix and matches no excluded entry. This is the same boundary browsers and
//! cookie-scoping systems enforce to keep sibling registrations (e.g.
//! `evil.co.uk` vs `bank.co.uk`) from being treated as same-origin.
//!
//! # Example
//!
//! ```rust
//! use etld_guard::{DomainValidator, SuffixTable, ValidationError};
//!
//! let table = SuffixTable::from_list_text("
//! // public suffixes
//! com
//! uk
//! co.uk
//! !example.uk
//! ").unwrap();
//!
//! let validator = DomainValidator::new(table);
//!
//! // Accepted: strictly below "co.uk"
//! let domain = validator.parse("www.example.co.uk").unwrap();
//! assert_eq!(domain.to_string(), "www.example.co.uk");
//! assert!(!domain.is_direct_tld_child());
//!
//! // Rejected: matches the "!example.uk" exclusion
//! let err = validator.parse("foo.example.uk").unwrap_err();
//! assert!(matches!(err, ValidationError::ExcludedSuffix(_)));
//! ```
//!
//! # Suffix List Format
//!
//! Lists use the upstream public-suffix text format, pre-parsed into
//! explicit included/excluded sets:
//!
//! | Line | Meaning |
//! |------|---------|
//! | `com` | Included suffix: names below it are registrable |
//! | `!example.uk` | Excluded suffix: vetoes any match unconditionally |
//! | `// ...` | Comment |
//! | `*.foo` | Rejected: wildcard semantics are not supported |
//!
//! JSON configuration (`{"included": [...], "excluded": [...]}`) is also
//! accepted; see [`SuffixList`].
//!
//! # Matching Semantics
//!
//! When a domain matches several included entries (`uk` and `co.uk`), the
//! entry with the most labels wins, so exclusions and the direct-child
//! predicate attach to the most specific suffix regardless of the order
//! the list was loaded in. Exclusions veto on any match.

pub mod decoder;
pub mod domain;
pub mod error;
pub mod suffix;
pub mod validator;

// Re-export commonly used items
pub use decoder::{DecodeError, IdnaDecoder, LabelDecoder, NilDecoder, StaticDecoder};
pub use domain::DomainName;
pub use error::{ListError, Result, ValidationError};
pub use suffix::{SuffixList, SuffixTable};
pub use validator::{DomainValidator, DEFAULT_CACHE_SIZE};
