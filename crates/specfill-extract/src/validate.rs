//! Generic value-quality gate, applied to every candidate regardless of label.

/// Longest value accepted by [`is_valid`].
pub const DEFAULT_MAX_LENGTH: usize = 100;

const MAX_SPECIAL_RATIO: f64 = 0.3;
const MAX_COMMAS: usize = 5;
const MAX_PERIODS: usize = 5;

/// [`is_valid_value`] with the default length limit.
pub fn is_valid(value: &str) -> bool {
    is_valid_value(value, DEFAULT_MAX_LENGTH)
}

/// Accept or reject a candidate value.
///
/// The value is trimmed first. Rejected when empty, longer than `max_length`
/// characters, when more than 30% of its characters are neither alphanumeric
/// nor a space, or when it holds more than five commas or five periods.
pub fn is_valid_value(value: &str, max_length: usize) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }

    let len = value.chars().count();
    if len > max_length {
        return false;
    }

    let special = value
        .chars()
        .filter(|c| !c.is_alphanumeric() && *c != ' ')
        .count();
    if special as f64 / len as f64 > MAX_SPECIAL_RATIO {
        return false;
    }

    value.matches(',').count() <= MAX_COMMAS && value.matches('.').count() <= MAX_PERIODS
}
