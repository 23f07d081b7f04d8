//! `econ-dashboard` binary: serves the Econometrics Solutions page or prints it.
mod bootstrap_helpers;
mod cli_args;

use anyhow::Result;
use clap::Parser;
use econ_gateway::{
    render_econ_dashboard_default_document, render_econ_dashboard_health_json,
    run_econ_dashboard_server, EconDashboardServerConfig,
};

use bootstrap_helpers::init_tracing;
use cli_args::Cli;

async fn run_cli(cli: Cli) -> Result<()> {
    if cli.render_page {
        print!("{}", render_econ_dashboard_default_document()?);
        return Ok(());
    }
    if cli.health_json {
        println!("{}", render_econ_dashboard_health_json()?);
        return Ok(());
    }
    run_econ_dashboard_server(EconDashboardServerConfig { bind: cli.bind }).await
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    tracing::debug!(bind = %cli.bind, "parsed econ dashboard cli");
    run_cli(cli).await
}
