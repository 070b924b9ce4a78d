//! Checks the relay's `.env.example` and `.env`.

use std::process::ExitCode;

use storefront_checks::{cli, env_file};

fn main() -> ExitCode {
    let config = cli::init();
    env_file::check_env_file(&env_file::EnvFileRule::stripe(&config.server_root)).emit()
}
