//! Toolbox section validation (paths, wrap geometry).

use crate::schema::AppConfig;

use super::helpers::{validate_not_blank, validate_range};

pub(crate) fn validate_toolbox(errors: &mut Vec<String>, config: &AppConfig) {
    let toolbox = &config.toolbox;
    validate_not_blank(errors, "toolbox.definition", toolbox.definition.as_deref());
    validate_not_blank(errors, "toolbox.preferences", toolbox.preferences.as_deref());
    validate_range(errors, "toolbox.width", toolbox.width, 40, 2000);
    validate_range(errors, "toolbox.spacing", toolbox.spacing, 0, 32);
    validate_range(errors, "toolbox.button_padding", toolbox.button_padding, 0, 16);
}
