//! Fails if an `index.tsx` sits one level above the client root.

use std::process::ExitCode;

use storefront_checks::{cli, files};

fn main() -> ExitCode {
    let config = cli::init();
    files::check_no_root_index_tsx(&config.client_root).emit()
}
