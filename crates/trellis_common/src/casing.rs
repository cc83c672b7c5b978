//! Identifier casing helpers for include namespacing.
//!
//! Spliced-in identifiers are rewritten as `prefix + TitleCase(camelCase(name))`
//! so that nested includes cannot collide with identifiers from sibling
//! includes or the parent document.

/// Converts a `snake_case` or `kebab-case` name to `camelCase`.
///
/// The first segment keeps its body but has its first character lowercased;
/// every following segment is capitalized. Names that are already camelCase
/// pass through with only the leading character lowercased.
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut first_segment = true;
    for segment in name.split(['_', '-']).filter(|s| !s.is_empty()) {
        if first_segment {
            out.push_str(&lower_first(segment));
            first_segment = false;
        } else {
            out.push_str(&capitalize_first(segment));
        }
    }
    out
}

/// Capitalizes the first character of a string, leaving the rest unchanged.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Combines a namespace prefix with a local identifier.
///
/// An empty prefix returns the name unchanged. Otherwise the name is
/// camelCased, its first letter is capitalized, and the result is appended
/// to the prefix: `combine_prefixed("header1", "title_label")` yields
/// `header1TitleLabel`.
pub fn combine_prefixed(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        return name.to_string();
    }
    format!("{prefix}{}", capitalize_first(&to_camel_case(name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_snake() {
        assert_eq!(to_camel_case("title_label"), "titleLabel");
        assert_eq!(to_camel_case("a_b_c"), "aBC");
    }

    #[test]
    fn camel_case_kebab() {
        assert_eq!(to_camel_case("title-label"), "titleLabel");
    }

    #[test]
    fn camel_case_passthrough() {
        assert_eq!(to_camel_case("titleLabel"), "titleLabel");
        assert_eq!(to_camel_case("Title"), "title");
    }

    #[test]
    fn camel_case_empty() {
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn capitalize() {
        assert_eq!(capitalize_first("label"), "Label");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn combine_with_prefix() {
        assert_eq!(combine_prefixed("header1", "title_label"), "header1TitleLabel");
        assert_eq!(combine_prefixed("header1", "label"), "header1Label");
        assert_eq!(combine_prefixed("header1", "title"), "header1Title");
    }

    #[test]
    fn combine_empty_prefix_is_identity() {
        assert_eq!(combine_prefixed("", "title_label"), "title_label");
    }

    #[test]
    fn combine_nested_prefixes_stay_distinct() {
        let outer = combine_prefixed("", "header1");
        let inner = combine_prefixed(&outer, "row");
        assert_eq!(combine_prefixed(&inner, "label"), "header1RowLabel");
    }
}
