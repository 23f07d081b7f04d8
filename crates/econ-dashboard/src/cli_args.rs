use clap::{ArgAction, Parser};
use econ_gateway::DEFAULT_DASHBOARD_BIND;

#[derive(Debug, Parser)]
#[command(
    name = "econ-dashboard",
    about = "Serve the Econometrics Solutions dashboard page",
    version
)]
/// Public struct `Cli` used by the `econ-dashboard` binary.
pub(crate) struct Cli {
    #[arg(
        long,
        env = "ECON_DASHBOARD_BIND",
        default_value = DEFAULT_DASHBOARD_BIND,
        help = "Socket address the dashboard server binds to"
    )]
    pub(crate) bind: String,

    #[arg(
        long = "render-page",
        action = ArgAction::SetTrue,
        conflicts_with = "health_json",
        help = "Print the rendered dashboard HTML document to stdout and exit without serving"
    )]
    pub(crate) render_page: bool,

    #[arg(
        long = "health-json",
        action = ArgAction::SetTrue,
        help = "Print the /healthz payload as pretty JSON and exit without serving"
    )]
    pub(crate) health_json: bool,
}
