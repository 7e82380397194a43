//! Parsing of the configured extension list.

/// Split a comma-separated extension list into trimmed names.
///
/// An empty value yields no names. Otherwise every segment is kept, in
/// order, including duplicates and segments that trim to the empty string.
///
/// # Example
///
/// ```
/// use extprobe::probe::parse_extension_list;
///
/// assert_eq!(parse_extension_list(" a, b ,a"), vec!["a", "b", "a"]);
/// assert!(parse_extension_list("").is_empty());
/// ```
pub fn parse_extension_list(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }

    raw.split(',').map(|s| s.trim().to_string()).collect()
}
