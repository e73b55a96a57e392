//! # List Shell
//!
//! The top-level component: it holds the employee collection, hosts at most
//! one open form, and asks before deleting.
//!
//! It runs as a single [`ShellActor`] task. Callers talk to it through a
//! cloneable [`ShellClient`]; every request carries a oneshot channel for the
//! reply, the same way for every operation:
//!
//! ```text
//! ShellClient ──ShellRequest──▶ ShellActor ──▶ FormWorkflow / EmpleadoGateway
//!      ▲                            │
//!      └────── oneshot reply ───────┘
//! ```

mod actor;
mod client;
mod error;
mod message;

pub use actor::{ShellActor, ShellContext};
pub use client::ShellClient;
pub use error::ShellError;
pub use message::{DeleteOutcome, ModalView, Response, ShellRequest, SubmitOutcome};
