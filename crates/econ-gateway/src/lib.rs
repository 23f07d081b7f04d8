//! HTTP surface serving the Econometrics Solutions dashboard.
pub mod dashboard_server;

pub use dashboard_server::*;
