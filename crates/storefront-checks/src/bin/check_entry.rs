//! Fails if the client contains any `.ts`/`.tsx` file.

use std::process::ExitCode;

use storefront_checks::{cli, scan};

fn main() -> ExitCode {
    let config = cli::init();
    scan::check_no_typescript(&config.client_root).emit()
}
