//! Name-shape heuristics shared by the naming rules
//!
//! The pluralization check is deliberately not a full linguistic algorithm:
//! a fixed suffix rule plus a short irregular-plural list. Mismatches with
//! natural language ("Status", "Series") are accepted limitations.

use regex::Regex;
use std::sync::OnceLock;

static PASCAL_CASE: OnceLock<Regex> = OnceLock::new();

/// Table names that are plural without ending in "s"
const IRREGULAR_PLURALS: &[&str] = &[
    "people", "children", "men", "women", "feet", "teeth", "geese", "mice", "oxen", "data",
    "criteria", "media",
];

/// PascalCase: an uppercase letter followed by letters/digits, no separators
pub(crate) fn is_pascal_case(name: &str) -> bool {
    let pattern = PASCAL_CASE.get_or_init(|| Regex::new(r"^[A-Z][A-Za-z0-9]*$").unwrap());
    pattern.is_match(name)
}

/// Heuristic plural check on the final word of a table name
///
/// `BlogPosts` is judged by `Posts`, `SalesPeople` by `People`. A word is
/// accepted as plural when it ends in `s` but not `ss`/`us`/`is`, or appears
/// in the irregular-plural list. Case-insensitive.
pub(crate) fn is_plural_table_name(table_name: &str) -> bool {
    let word = final_word(table_name).to_ascii_lowercase();
    if word.is_empty() {
        return false;
    }

    if IRREGULAR_PLURALS.contains(&word.as_str()) {
        return true;
    }

    word.ends_with('s') && !word.ends_with("ss") && !word.ends_with("us") && !word.ends_with("is")
}

/// Case-insensitive ASCII suffix check
pub(crate) fn ends_with_ignore_ascii_case(name: &str, suffix: &str) -> bool {
    if name.len() < suffix.len() {
        return false;
    }
    let split = name.len() - suffix.len();
    name.is_char_boundary(split) && name[split..].eq_ignore_ascii_case(suffix)
}

/// Last uppercase-delimited word of a PascalCase name
fn final_word(name: &str) -> &str {
    name.char_indices()
        .rev()
        .find(|(_, c)| c.is_ascii_uppercase())
        .map(|(i, _)| &name[i..])
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_accepts_simple_names() {
        assert!(is_pascal_case("BlogPost"));
        assert!(is_pascal_case("Users"));
        assert!(is_pascal_case("Address2"));
    }

    #[test]
    fn pascal_case_rejects_separators_and_lowercase() {
        assert!(!is_pascal_case("blogPost"));
        assert!(!is_pascal_case("blog_post"));
        assert!(!is_pascal_case("Blog Post"));
        assert!(!is_pascal_case("Blog-Post"));
        assert!(!is_pascal_case(""));
        assert!(!is_pascal_case("2Blogs"));
    }

    #[test]
    fn plural_suffix_rule() {
        assert!(is_plural_table_name("Users"));
        assert!(is_plural_table_name("BlogPosts"));
        assert!(is_plural_table_name("Addresses"));
        assert!(is_plural_table_name("Categories"));

        assert!(!is_plural_table_name("User"));
        assert!(!is_plural_table_name("BlogPost"));
        // Double-s, -us and -is endings read as singular
        assert!(!is_plural_table_name("Address"));
        assert!(!is_plural_table_name("Status"));
        assert!(!is_plural_table_name("Analysis"));
    }

    #[test]
    fn irregular_plurals_pass() {
        assert!(is_plural_table_name("People"));
        assert!(is_plural_table_name("SalesPeople"));
        assert!(is_plural_table_name("Children"));
        assert!(is_plural_table_name("Data"));
    }

    #[test]
    fn final_word_extraction() {
        assert_eq!(final_word("BlogPosts"), "Posts");
        assert_eq!(final_word("SalesPeople"), "People");
        assert_eq!(final_word("users"), "users");
    }

    #[test]
    fn suffix_check_is_case_insensitive() {
        assert!(ends_with_ignore_ascii_case("CustomerId", "Id"));
        assert!(ends_with_ignore_ascii_case("CustomerID", "Id"));
        assert!(ends_with_ignore_ascii_case("customerid", "Id"));

        assert!(!ends_with_ignore_ascii_case("Customer", "Id"));
        assert!(!ends_with_ignore_ascii_case("I", "Id"));
    }
}
