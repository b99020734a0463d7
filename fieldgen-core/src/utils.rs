//! Shared utility functions for identifier derivation.

/// Upper-case the first character, leaving the rest untouched (e.g., "user" -> "User").
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first character, leaving the rest untouched (e.g., "UserDto" -> "userDto").
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to kebab-case (e.g., "UserFields" -> "user-fields").
///
/// A hyphen is inserted at every lowercase-to-uppercase boundary and the whole
/// result is lower-cased. Underscores and digits are left alone.
pub fn to_kebab_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for c in s.chars() {
        if prev_lower && c.is_ascii_uppercase() {
            result.push('-');
        }
        prev_lower = c.is_ascii_lowercase();
        result.extend(c.to_lowercase());
    }
    result
}
