use clap::Parser;

/// Toolbox: build a tool palette from a definition and drive it headlessly.
#[derive(Parser, Debug)]
#[command(name = "toolbox", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Toolbox definition file (TOML or YAML).
    #[arg(short = 'd', long)]
    pub definition: Option<String>,

    /// Preference file path override.
    #[arg(short = 'p', long)]
    pub preferences: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Activate the disclosure of the group with this title. Repeatable.
    #[arg(short = 't', long = "toggle", value_name = "TITLE")]
    pub toggles: Vec<String>,

    /// Select the tool for this action and print its drag payloads.
    #[arg(long, value_name = "ACTION")]
    pub drag: Option<String>,

    /// Print the window and toolbox as JSON instead of an outline.
    #[arg(long)]
    pub json: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
