//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter that
//! hides the module prefix (`with_target(false)`) and writes to stderr, so
//! stdout stays free for the table the CLI prints.
//!
//! The level comes from `RUST_LOG` and defaults to `info`:
//!
//! ```bash
//! # Default: one line per shell event
//! empleados list
//!
//! # Full drafts and request spans
//! RUST_LOG=debug empleados edit 3 --sueldo 2100
//! ```
//!
//! With `RUST_LOG=info` an edit reads roughly like:
//!
//! ```text
//! INFO Refreshed size=4
//! INFO System started size=4
//! INFO submit: Committed kind=Edit(EmpleadoId(3))
//! INFO Refreshed size=4
//! ```
//!
//! Gateway calls and workflow transitions are `#[instrument]`ed, so at
//! `debug` their spans appear inline (`update{empleado=...}`).
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

pub fn setup_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
