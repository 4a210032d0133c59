//! Identifier normalization
//!
//! Comic and user ids are compared case-insensitively but persisted exactly as
//! entered. Every lookup boundary folds ids through [`fold_key`] so the
//! comparison rule lives in one place.

/// Canonical form of an id or email used for uniqueness checks and lookups
pub fn fold_key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Case-insensitive id comparison
pub fn same_key(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}
