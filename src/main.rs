use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::error;

use snip_app::SnipApp;
use snip_platform::DirsAppDirs;
use snipstack::bootstrap::{
    init_tracing_subscriber, load_optional_config, wire_dependencies, HostPaths, WiringOptions,
};
use snipstack::bootstrap::config::CONFIG_FILE_NAME;
use snipstack::cli::{run_command, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %format!("{err:#}"), "command failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let dirs = DirsAppDirs::new().get_app_dirs()?;
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| dirs.config_root.join(CONFIG_FILE_NAME));
    let mut config = load_optional_config(&config_path)?;
    if let Some(data_dir) = cli.data_dir.clone() {
        config.data_dir = Some(data_dir);
    }
    let paths = HostPaths::resolve(&dirs, &config);

    init_tracing_subscriber(Some(&paths.logs_dir), config.log_filter.as_deref())?;

    let options = WiringOptions {
        assume_yes: cli.assume_yes(),
    };
    let deps = wire_dependencies(&paths, options)?;
    let app = SnipApp::bootstrap(deps)
        .await
        .with_context(|| format!("failed to load history from {}", paths.document.display()))?;

    let result = run_command(cli.command, &app).await;
    app.shutdown().await;
    result
}
