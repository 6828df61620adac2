use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ListError;

/// Pre-parsed effective-TLD list configuration.
///
/// Two ordered sequences of dot-joined label strings: `included` names the
/// suffixes under which registration is presumed public, `excluded` names
/// the carve-outs that veto a match. This is the shape handed to
/// [`SuffixTable`](super::SuffixTable); entries are normalized there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixList {
    #[serde(default)]
    pub included: Vec<String>,
    #[serde(default)]
    pub excluded: Vec<String>,
}

impl SuffixList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the upstream public-suffix list text format.
    ///
    /// One entry per line. `//` starts a comment (full-line or inline),
    /// blank lines are skipped, and a leading `!` marks an exclusion entry.
    /// Wildcard (`*`) entries carry matching semantics this crate does not
    /// implement and are rejected with the offending line number.
    pub fn parse(text: &str) -> Result<Self, ListError> {
        let mut included = Vec::new();
        let mut excluded = Vec::new();

        for (line_num, line) in text.lines().enumerate() {
            let line_num = line_num + 1; // 1-based line numbers

            // Remove comments and trim whitespace
            let line = if let Some(comment_pos) = line.find("//") {
                &line[..comment_pos]
            } else {
                line
            };
            let line = line.trim();

            // Skip empty lines
            if line.is_empty() {
                continue;
            }

            if line.contains('*') {
                return Err(ListError::ParseAtLine {
                    line: line_num,
                    message: format!("wildcard entries are not supported: {}", line),
                });
            }

            if let Some(entry) = line.strip_prefix('!') {
                if entry.is_empty() {
                    return Err(ListError::ParseAtLine {
                        line: line_num,
                        message: "empty exclusion entry".to_string(),
                    });
                }
                excluded.push(entry.to_string());
            } else {
                included.push(line.to_string());
            }
        }

        debug!(
            included = included.len(),
            excluded = excluded.len(),
            "parsed suffix list"
        );

        Ok(Self { included, excluded })
    }

    /// Read and parse a suffix list file in the upstream text format.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ListError> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::parse(&text)
    }

    /// Parse a suffix list from a JSON document of the form
    /// `{"included": [...], "excluded": [...]}`.
    pub fn from_json(text: &str) -> Result<Self, ListError> {
        Ok(serde_json::from_str(text)?)
    }
}
