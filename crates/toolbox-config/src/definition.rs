//! Toolbox definition loading: TOML or YAML file, or the built-in default.

use std::path::Path;

use toolbox_common::{ConfigError, ToolboxDefinition};
use tracing::info;

use crate::schema::ToolboxConfig;

/// The built-in modeling toolbox.
const DEFAULT_DEFINITION_TOML: &str = r##"
[[group]]
[[group.item]]
action = "toolbox-pointer"
label = "Pointer"
icon = "toolbox-pointer"
shortcut = "Escape"

[[group.item]]
action = "toolbox-comment"
label = "Comment"
icon = "toolbox-comment"
shortcut = "k"

[[group.item]]
action = "toolbox-comment-line"
label = "Comment line"
icon = "toolbox-comment-line"
shortcut = "<Shift>K"

[[group]]
title = "Classes"

[[group.item]]
action = "toolbox-class"
label = "Class"
icon = "toolbox-class"
shortcut = "c"

[[group.item]]
action = "toolbox-interface"
label = "Interface"
icon = "toolbox-interface"
shortcut = "i"

[[group.item]]
action = "toolbox-package"
label = "Package"
icon = "toolbox-package"
shortcut = "p"

[[group.item]]
action = "toolbox-association"
label = "Association"
icon = "toolbox-association"
shortcut = "<Shift>A"

[[group.item]]
action = "toolbox-dependency"
label = "Dependency"
icon = "toolbox-dependency"
shortcut = "<Shift>D"

[[group.item]]
action = "toolbox-generalization"
label = "Generalization"
icon = "toolbox-generalization"
shortcut = "<Shift>G"

[[group]]
title = "Components"

[[group.item]]
action = "toolbox-component"
label = "Component"
icon = "toolbox-component"
shortcut = "o"

[[group.item]]
action = "toolbox-artifact"
label = "Artifact"
icon = "toolbox-artifact"
shortcut = "h"

[[group.item]]
action = "toolbox-node"
label = "Node"
icon = "toolbox-node"
shortcut = "n"

[[group]]
title = "Actions"

[[group.item]]
action = "toolbox-action"
label = "Action"
icon = "toolbox-action"
shortcut = "a"

[[group.item]]
action = "toolbox-initial-node"
label = "Initial node"
icon = "toolbox-initial-node"
shortcut = "j"

[[group.item]]
action = "toolbox-activity-final-node"
label = "Activity final node"
icon = "toolbox-activity-final-node"
shortcut = "f"

[[group.item]]
action = "toolbox-decision-node"
label = "Decision/merge node"
icon = "toolbox-decision-node"
shortcut = "g"

[[group.item]]
action = "toolbox-flow"
label = "Control/object flow"
icon = "toolbox-flow"
shortcut = "<Shift>F"

[[group]]
title = "Use Cases"

[[group.item]]
action = "toolbox-usecase"
label = "Use case"
icon = "toolbox-usecase"
shortcut = "u"

[[group.item]]
action = "toolbox-actor"
label = "Actor"
icon = "toolbox-actor"
shortcut = "t"

[[group.item]]
action = "toolbox-include"
label = "Include"
icon = "toolbox-include"
shortcut = "<Shift>U"

[[group.item]]
action = "toolbox-extend"
label = "Extend"
icon = "toolbox-extend"
shortcut = "<Shift>X"
"##;

/// Parse the built-in definition.
pub fn default_definition() -> Result<ToolboxDefinition, ConfigError> {
    toml::from_str(DEFAULT_DEFINITION_TOML)
        .map_err(|e| ConfigError::ParseError(format!("built-in toolbox definition: {e}")))
}

/// Load a definition from a TOML file, or YAML for `.yaml`/`.yml`.
pub fn load_definition_from_path(path: &Path) -> Result<ToolboxDefinition, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read definition {}: {e}", path.display()))
    })?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let definition: ToolboxDefinition = if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to parse definition YAML {}: {e}",
                path.display()
            ))
        })?
    } else {
        toml::from_str(&content).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to parse definition TOML {}: {e}",
                path.display()
            ))
        })?
    };

    info!(
        "loaded toolbox definition from {} ({} groups, {} items)",
        path.display(),
        definition.groups.len(),
        definition.item_count()
    );
    Ok(definition)
}

/// Resolve the definition named by the config.
///
/// An explicit `toolbox.definition` path must load. Otherwise
/// `toolbox.toml` in the config directory is used when present, and the
/// built-in definition when not.
pub fn resolve_definition(config: &ToolboxConfig) -> Result<ToolboxDefinition, ConfigError> {
    if let Some(ref path) = config.definition {
        return load_definition_from_path(Path::new(path));
    }

    if let Ok(path) = crate::paths::definition_file() {
        if path.exists() {
            return load_definition_from_path(&path);
        }
    }

    info!("using built-in toolbox definition");
    default_definition()
}
