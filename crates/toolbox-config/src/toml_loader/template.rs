//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Toolbox Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Toolbox"
# width = 800              # 100-10000
# height = 600             # 100-10000
# resizable = true
# icons = ["toolbox-24x24.png", "toolbox-48x48.png", "toolbox-96x96.png", "toolbox-256x256.png"]
# menubar_path = "/mainwindow"          # empty for no menubar
# toolbar_path = "/mainwindow-toolbar"  # empty for no toolbar

[toolbox]
# definition = "/path/to/toolbox.toml"      # TOML or YAML; default: toolbox.toml here, else built-in
# preferences = "/path/to/preferences.toml" # default: preferences.toml here
# icon_size = "large_toolbar"  # menu, small_toolbar, large_toolbar, button, dnd, dialog
# width = 160                  # 40-2000
# spacing = 2                  # 0-32
# button_padding = 4           # 0-16

[logging]
# level = "INFO"               # TRACE, DEBUG, INFO, WARNING, ERROR
"##
}
