mod app_state;
mod cli;
mod config_adapters;
mod headless;
mod render;

use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use toolbox_config::schema::LogLevel;
use toolbox_config::AppConfig;

/// Filter used when neither the command line nor the config yields a
/// usable one.
const DEFAULT_LOG_DIRECTIVE: &str = "toolbox=info";

fn init_logging(cli_level: Option<&str>, config_level: LogLevel) {
    let directive = match cli_level {
        Some(level) => level.to_owned(),
        None => format!("toolbox={}", config_level.directive()),
    };
    let filter = match directive.parse() {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::new(DEFAULT_LOG_DIRECTIVE),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config comes first so its log level can seed the filter; a load
    // failure is reported once logging is up.
    let loaded = match args.config {
        Some(ref path) => toolbox_config::load_config_from(Path::new(path)),
        None => toolbox_config::load_config(),
    };
    let (mut config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_logging(args.log_level.as_deref(), config.logging.level);
    tracing::info!("Toolbox v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    if let Some(path) = args.definition {
        config.toolbox.definition = Some(path);
    }
    if let Some(path) = args.preferences {
        config.toolbox.preferences = Some(path);
    }

    let mut app = match app_state::ToolboxApp::new(config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Failed to build toolbox: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!("{} shortcuts bound", app.toolbox().shortcuts().len());

    for title in &args.toggles {
        app.toggle_group(title);
    }

    let mut status = ExitCode::SUCCESS;
    if let Some(ref action) = args.drag {
        match app.select_tool(action) {
            Some(payloads) => {
                for payload in payloads {
                    let target = payload.target();
                    println!(
                        "{}\t{}\t{}",
                        target.mime(),
                        target.info(),
                        payload.as_str().unwrap_or_default()
                    );
                }
            }
            None => status = ExitCode::FAILURE,
        }
    }

    if args.json {
        match app.to_json().and_then(|v| serde_json::to_string_pretty(&v)) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!("Failed to serialize toolbox: {e}");
                status = ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", app.outline());
    }

    app.shutdown();
    status
}
