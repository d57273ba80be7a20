use std::sync::LazyLock;

use regex::Regex;

/// One or more trailing parenthetical qualifiers, e.g. " (Pob.)".
static TRAILING_QUALIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\s*\([^()]*\))+\s*$").expect("qualifier pattern is a valid regex")
});

/// Canonical join key for an area name.
/// Lower-cases, strips trailing parenthetical qualifiers and surrounding whitespace.
pub fn normalize_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    TRAILING_QUALIFIER.replace(&lowered, "").trim().to_string()
}

/// Stricter key used when joining independently produced metric datasets:
/// the normalized name with every non-alphanumeric character removed.
pub fn compact_name(name: &str) -> String {
    normalize_name(name).chars().filter(|c| c.is_alphanumeric()).collect()
}
