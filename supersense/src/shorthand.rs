//! Shorthand codes.
//!
//! Annotators may write a backtick code instead of a full label to mean
//! "infer the category from this". Codes may carry a stray `p.` prefix.

/// The unresolved-label marker.
pub const UNRESOLVED: &str = "??";

/// The possessive shorthand.
pub const POSSESSIVE: &str = "`$";

/// Shorthand codes that keep their `p.` prefix off when labels are prefixed.
pub const SPECIAL_LABELS: &[&str] = &["`i", "`d", "`c", "`$", UNRESOLVED];

/// Map a shorthand code to the category it stands for. The possessive
/// shorthand has no fixed category.
pub fn shorthand_lexcat(label: &str) -> Option<&'static str> {
    match label {
        "`a" => Some("AUX"),
        "`c" => Some("CCONJ"),
        "`d" => Some("DISC"),
        "`i" => Some("INF"),
        "`j" => Some("ADJ"),
        "`n" => Some("N"),
        "`o" => Some("PRON"),
        "`r" => Some("ADV"),
        "`v" => Some("V"),
        _ => None,
    }
}

/// Returns true for backtick codes, with or without a `p.` prefix.
pub fn is_shorthand(label: &str) -> bool {
    label.starts_with('`') || label.starts_with("p.`")
}

/// Strip a stray `p.` from a shorthand code.
pub fn bare_shorthand(label: &str) -> &str {
    label.strip_prefix("p.").filter(|s| s.starts_with('`')).unwrap_or(label)
}

pub fn is_unresolved(label: &str) -> bool {
    label == UNRESOLVED
}

/// Returns true for the possessive shorthand, with or without `p.`.
pub fn is_possessive(label: &str) -> bool {
    bare_shorthand(label) == POSSESSIVE
}
