//! Window section validation (title, size).

use crate::schema::AppConfig;

use super::helpers::{validate_not_blank, validate_range};

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &AppConfig) {
    validate_not_blank(errors, "window.title", Some(&config.window.title));
    validate_range(errors, "window.width", config.window.width, 100, 10000);
    validate_range(errors, "window.height", config.window.height, 100, 10000);
}
