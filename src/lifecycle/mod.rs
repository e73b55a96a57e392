//! Runtime orchestration and lifecycle management.
//!
//! - [`EmpleadoSystem`] - spawns the shell actor, wires its dependencies and
//!   shuts it down
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod system;
pub mod tracing;

pub use system::*;
pub use tracing::*;
