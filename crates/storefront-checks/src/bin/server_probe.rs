//! Liveness probe against a locally running relay.

use std::process::ExitCode;

use storefront_checks::{cli, probe};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = cli::init();
    probe::probe_liveness(&config.probe_url(), probe::PROBE_TIMEOUT)
        .await
        .emit()
}
