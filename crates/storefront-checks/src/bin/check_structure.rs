//! Fails if any required client file is missing.

use std::process::ExitCode;

use storefront_checks::{cli, files};

fn main() -> ExitCode {
    let config = cli::init();
    files::check_client_structure(&config.client_root).emit()
}
