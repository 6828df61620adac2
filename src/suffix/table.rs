use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::error::ListError;

use super::list::SuffixList;

/// Immutable effective-TLD table.
///
/// Holds the included and excluded suffix sets and answers suffix-ancestry
/// queries over them. Entries are normalized at construction (punycode
/// decoded to Unicode, case folded, shape checked), so lookups assume the
/// queried domain is already in lowercase Unicode form; the validation
/// pipeline guarantees that.
///
/// Built once at startup and shared read-only; all queries are total and
/// side-effect-free, so the table can cross threads without locking.
#[derive(Debug, Clone, Default)]
pub struct SuffixTable {
    /// Suffixes under which registration is presumed public (e.g. "com", "co.uk")
    included: HashSet<String>,
    /// Carve-outs that veto a match despite an included ancestor
    excluded: HashSet<String>,
}

impl SuffixTable {
    /// Build a table from a pre-parsed suffix list.
    pub fn from_list(list: &SuffixList) -> Result<Self, ListError> {
        let mut included = HashSet::with_capacity(list.included.len());
        let mut excluded = HashSet::with_capacity(list.excluded.len());

        for entry in &list.included {
            included.insert(normalize_entry(entry)?);
        }
        for entry in &list.excluded {
            excluded.insert(normalize_entry(entry)?);
        }

        debug!(
            included = included.len(),
            excluded = excluded.len(),
            "suffix table built"
        );

        Ok(Self { included, excluded })
    }

    /// Build a table from suffix list text (see [`SuffixList::parse`]).
    pub fn from_list_text(text: &str) -> Result<Self, ListError> {
        Self::from_list(&SuffixList::parse(text)?)
    }

    /// Build a table from a JSON suffix list document.
    pub fn from_json(text: &str) -> Result<Self, ListError> {
        Self::from_list(&SuffixList::from_json(text)?)
    }

    /// Build a table from a suffix list file in the upstream text format.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ListError> {
        Self::from_list(&SuffixList::from_file(path)?)
    }

    /// Number of included suffix entries.
    pub fn included_count(&self) -> usize {
        self.included.len()
    }

    /// Number of excluded suffix entries.
    pub fn excluded_count(&self) -> usize {
        self.excluded.len()
    }

    /// Check if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.included.is_empty() && self.excluded.is_empty()
    }

    /// Longest included suffix matching `domain`.
    ///
    /// Among all included entries `s` with `domain == s` or `domain` ending
    /// in `".{s}"`, returns the one with the most labels. Longest match
    /// wins: a domain may match both a generic entry ("uk") and a more
    /// specific one ("co.uk"), and classification must attach to the
    /// specific entry regardless of load order.
    pub fn longest_included_suffix(&self, domain: &str) -> Option<&str> {
        if let Some(entry) = self.included.get(domain) {
            return Some(entry.as_str());
        }
        self.included_ancestor(domain)
    }

    /// Longest included entry that is a proper ancestor of `domain`.
    ///
    /// Walks up the label hierarchy one lookup per level; the nearest
    /// parent is checked first, so the first hit is the longest match.
    pub(crate) fn included_ancestor(&self, domain: &str) -> Option<&str> {
        let mut pos = 0;
        while let Some(dot_pos) = domain[pos..].find('.') {
            let parent = &domain[pos + dot_pos + 1..];
            if let Some(entry) = self.included.get(parent) {
                return Some(entry.as_str());
            }
            pos += dot_pos + 1;
        }
        None
    }

    /// Check if any excluded entry equals `domain` or is an ancestor of it.
    ///
    /// Exclusions veto unconditionally, so any match counts. No
    /// longest-match selection here.
    pub fn is_excluded(&self, domain: &str) -> bool {
        if self.excluded.contains(domain) {
            return true;
        }
        let mut pos = 0;
        while let Some(dot_pos) = domain[pos..].find('.') {
            let parent = &domain[pos + dot_pos + 1..];
            if self.excluded.contains(parent) {
                return true;
            }
            pos += dot_pos + 1;
        }
        false
    }

    /// Check if `domain` sits exactly one label below its longest matched
    /// included suffix.
    ///
    /// A domain that is itself a suffix entry has zero labels above the
    /// match and is not a direct child.
    pub fn is_direct_child_of_suffix(&self, domain: &str) -> bool {
        let Some(suffix) = self.longest_included_suffix(domain) else {
            return false;
        };
        if suffix.len() >= domain.len() {
            return false;
        }
        let head = &domain[..domain.len() - suffix.len() - 1];
        !head.is_empty() && !head.contains('.')
    }
}

/// Normalize a suffix entry to lowercase Unicode form.
///
/// Punycode labels are decoded; the result must be a plain dot-joined label
/// sequence with no empty labels and no leading/trailing dot.
fn normalize_entry(entry: &str) -> Result<String, ListError> {
    let invalid = |message: &str| ListError::InvalidEntry {
        entry: entry.to_string(),
        message: message.to_string(),
    };

    let trimmed = entry.trim();
    if trimmed.is_empty() {
        return Err(invalid("entry is empty"));
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(invalid("entry contains whitespace"));
    }

    let (unicode, result) = idna::domain_to_unicode(trimmed);
    if result.is_err() {
        return Err(invalid("entry is not valid punycode/IDNA"));
    }

    if unicode.is_empty()
        || unicode.starts_with('.')
        || unicode.ends_with('.')
        || unicode.contains("..")
    {
        return Err(invalid("entry has empty labels"));
    }

    Ok(unicode)
}
