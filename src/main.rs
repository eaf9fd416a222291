use std::process;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use quanklink::cli::Cli;
use quanklink::config::{get_config, init_config, update_config};
use quanklink::context::AppContext;
use quanklink::interfaces::cli::run_cli_command;
use quanklink::system::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_config(cli.config.as_deref());

    // 命令行参数覆盖配置文件
    let mut config = (*get_config()).clone();
    if let Some(backend) = cli.backend {
        config.api.backend = backend;
    }
    if let Some(session) = cli.session.clone() {
        config.session.file = Some(session);
    }
    update_config(config);
    let config = get_config();

    let log_guard = init_logging(&config).context("Failed to initialize logging")?;
    debug!("Configuration: {:?}", config);

    let ctx = AppContext::from_config(Arc::clone(&config)).context("Failed to open session")?;

    if let Err(e) = run_cli_command(cli.command, &ctx).await {
        eprintln!("{}", e.format_colored());
        drop(log_guard);
        process::exit(1);
    }

    Ok(())
}
