//! # storefront-checks
//!
//! Preflight checks run before the client and relay are started. Each check
//! produces a [`Report`]: an ordered list of findings with a severity, from
//! which the process exit code is derived.
//!
//! | command                   | check                                         | fails with |
//! |---------------------------|-----------------------------------------------|------------|
//! | `check-entry`             | no `.ts`/`.tsx` file anywhere in the client   | 1          |
//! | `check-no-root-index-tsx` | no `index.tsx` next to the client directory   | 1          |
//! | `check-structure`         | client entry files and assets exist           | 2          |
//! | `env-check`               | `.env.example` exists, `.env` sets the key    | 1 or 2     |
//! | `server-probe`            | relay answers `GET /` with `{ "ok": true }`   | 2          |

pub mod cli;
pub mod config;
pub mod env_file;
pub mod error;
pub mod files;
pub mod probe;
pub mod report;
pub mod scan;

pub use config::CheckConfig;
pub use error::{CheckError, Result};
pub use report::{Finding, Report, Severity};
