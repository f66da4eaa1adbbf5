//! Shared validation helpers used by all section validators.

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is set but blank.
pub(crate) fn validate_not_blank(errors: &mut Vec<String>, name: &str, value: Option<&str>) {
    if matches!(value, Some(v) if v.trim().is_empty()) {
        errors.push(format!("{name} must not be blank"));
    }
}
