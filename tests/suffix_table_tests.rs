//! Integration tests for SuffixTable using a realistic slice of a
//! public-suffix list.

use etld_guard::SuffixTable;

/// A slice of real-world suffix entries, wildcard rules flattened into
/// their literal form.
fn build_table() -> SuffixTable {
    let list_text = r#"
// ===BEGIN ICANN DOMAINS===

// com : registry operated by Verisign
com

// net : registry operated by Verisign
net

// org : registry operated by Public Interest Registry
org

// uk : https://www.nominet.uk/
uk
co.uk
org.uk
ac.uk
gov.uk

// jp : https://jprs.co.jp/
jp
co.jp
ne.jp
kawasaki.jp
!city.kawasaki.jp

// рф : Russian Federation (IDN ccTLD, list carries the punycode form)
xn--p1ai

// 中国 : China (IDN ccTLD, Unicode form)
中国
"#;
    SuffixTable::from_list_text(list_text).unwrap()
}

#[test]
fn test_table_counts() {
    let table = build_table();
    assert_eq!(table.included_count(), 14);
    assert_eq!(table.excluded_count(), 1);
    assert!(!table.is_empty());
}

#[test]
fn test_longest_suffix_selection() {
    let table = build_table();

    // Specific entry wins over the generic TLD
    assert_eq!(table.longest_included_suffix("foo.co.uk"), Some("co.uk"));
    assert_eq!(table.longest_included_suffix("bbc.ac.uk"), Some("ac.uk"));
    assert_eq!(
        table.longest_included_suffix("deep.sub.gov.uk"),
        Some("gov.uk")
    );

    // Only the generic entry matches
    assert_eq!(table.longest_included_suffix("foo.uk"), Some("uk"));
    assert_eq!(table.longest_included_suffix("example.com"), Some("com"));

    // An entry matches itself
    assert_eq!(table.longest_included_suffix("co.uk"), Some("co.uk"));

    // No entry matches
    assert_eq!(table.longest_included_suffix("example.biz"), None);
    assert_eq!(table.longest_included_suffix("notcom"), None);
}

#[test]
fn test_label_boundaries_respected() {
    let table = build_table();

    // "fakeco.uk" ends with "co.uk" as a string but not at a label boundary
    assert_eq!(table.longest_included_suffix("fakeco.uk"), Some("uk"));
    assert_eq!(table.longest_included_suffix("notorg"), None);
}

#[test]
fn test_exclusion_veto() {
    let table = build_table();

    assert!(table.is_excluded("city.kawasaki.jp"));
    assert!(table.is_excluded("www.city.kawasaki.jp"));
    assert!(table.is_excluded("a.b.city.kawasaki.jp"));

    assert!(!table.is_excluded("kawasaki.jp"));
    assert!(!table.is_excluded("other.kawasaki.jp"));
    assert!(!table.is_excluded("city.kawasaki.jp.evil.com"));
}

#[test]
fn test_direct_child_queries() {
    let table = build_table();

    assert!(table.is_direct_child_of_suffix("example.com"));
    assert!(table.is_direct_child_of_suffix("example.co.uk"));
    assert!(table.is_direct_child_of_suffix("foo.kawasaki.jp"));

    assert!(!table.is_direct_child_of_suffix("www.example.com"));
    assert!(!table.is_direct_child_of_suffix("www.example.co.uk"));

    // Suffix entries themselves are not children
    assert!(!table.is_direct_child_of_suffix("co.uk"));
    assert!(!table.is_direct_child_of_suffix("uk"));
}

#[test]
fn test_idn_entries_match_unicode_domains() {
    let table = build_table();

    // xn--p1ai is stored decoded, so Unicode domains match directly
    assert_eq!(table.longest_included_suffix("пример.рф"), Some("рф"));
    assert!(table.is_direct_child_of_suffix("пример.рф"));

    assert_eq!(table.longest_included_suffix("例子.中国"), Some("中国"));
    assert!(!table.is_direct_child_of_suffix("www.例子.中国"));
}

#[test]
fn test_shared_across_threads() {
    use std::sync::Arc;

    let table = Arc::new(build_table());
    let mut handles = Vec::new();

    for i in 0..4 {
        let table = table.clone();
        handles.push(std::thread::spawn(move || {
            let domain = format!("host{}.co.uk", i);
            assert_eq!(table.longest_included_suffix(&domain), Some("co.uk"));
            assert!(!table.is_excluded(&domain));
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
}
