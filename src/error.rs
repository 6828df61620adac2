use thiserror::Error;

/// Rejection of an untrusted domain name string.
///
/// Every variant is a caller-input problem, never a system fault; nothing
/// here is transient or retryable. Variants carry the offending input so
/// callers can report it without keeping the original string around.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Raw string fails basic shape rules (empty, whitespace, empty labels,
    /// leading or trailing dot).
    #[error("malformed domain name: {0:?}")]
    MalformedSyntax(String),

    /// Punycode/IDNA decoding of the domain failed.
    #[error("punycode decode failed for {input:?}: {message}")]
    DecodeFailure { input: String, message: String },

    /// No included suffix is an ancestor of the domain.
    #[error("domain has no allowed public suffix as ancestor: {0:?}")]
    NoAllowedSuffix(String),

    /// The domain matches an excluded suffix despite matching an included one.
    #[error("domain matches an excluded suffix: {0:?}")]
    ExcludedSuffix(String),
}

/// Suffix list loading and parsing errors.
#[derive(Error, Debug)]
pub enum ListError {
    #[error("suffix list parse error at line {line}: {message}")]
    ParseAtLine { line: usize, message: String },

    #[error("invalid suffix entry {entry:?}: {message}")]
    InvalidEntry { entry: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = ValidationError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_matchable() {
        // Consumers should be able to programmatically match rejection
        // reasons instead of parsing error message strings.
        let err = ValidationError::NoAllowedSuffix("example.biz".into());
        match &err {
            ValidationError::NoAllowedSuffix(domain) => assert_eq!(domain, "example.biz"),
            _ => panic!("expected NoAllowedSuffix"),
        }
    }

    #[test]
    fn test_validation_error_display_includes_input() {
        let err = ValidationError::MalformedSyntax("a..b.com".into());
        let display = format!("{}", err);
        assert!(display.contains("a..b.com"), "got: {}", display);

        let err = ValidationError::DecodeFailure {
            input: "xn--.com".into(),
            message: "invalid punycode".into(),
        };
        let display = format!("{}", err);
        assert!(display.contains("xn--.com"), "got: {}", display);
    }

    #[test]
    fn test_validation_error_is_cloneable_and_comparable() {
        // The validator caches rejections, so errors must be Clone + Eq.
        let err = ValidationError::ExcludedSuffix("foo.example.uk".into());
        assert_eq!(err.clone(), err);
    }

    #[test]
    fn test_list_error_line_numbers() {
        let err = ListError::ParseAtLine {
            line: 7,
            message: "wildcard entries are not supported".into(),
        };
        let display = format!("{}", err);
        assert!(display.contains("line 7"), "got: {}", display);
    }
}
