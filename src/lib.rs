//! # Empleado CRUD
//!
//! A client for an Empleado (employee) REST API: list the records, create and
//! edit them through a validated form, and delete them after confirmation.
//!
//! ## Architecture Notes
//!
//! ### 1. One Sequential Shell
//! The [`shell::ShellActor`] owns the collection and the single open form and
//! handles one request at a time. Callers only see the cloneable
//! [`shell::ShellClient`]; a second submit always observes the first's result.
//!
//! ### 2. Context Injection
//! The backend and the confirmation prompt are injected when the shell starts
//! running ([`shell::ShellContext`]), so tests swap in
//! [`gateway::mock::MockGateway`] and [`presentation::ScriptedPrompt`].
//!
//! ### 3. Typed Errors, Rendered Late
//! Every component returns its own `thiserror` enum. Nothing is shown to the
//! user until [`presentation::Notice`] turns an error into dialog text.
//!
//! ## Module Tour
//!
//! - [`model`]: the [`Empleado`](model::Empleado) record and its wire shape.
//! - [`validation`]: the business rules a draft must pass before it is sent.
//! - [`gateway`]: the [`EmpleadoGateway`](gateway::EmpleadoGateway) trait, its
//!   `reqwest` implementation and a scripted mock.
//! - [`workflow`]: the create/edit form state machine.
//! - [`shell`]: the list-level actor that hosts forms and deletes rows.
//! - [`presentation`]: notices, confirmations and terminal rendering.
//! - [`config`]: API URL and timeout settings.
//! - [`lifecycle`]: spawning and shutting down the shell, tracing setup.
//!
//! ## Quick Start
//!
//! ```bash
//! EMPLEADOS_API_URL=http://localhost:5000/api RUST_LOG=info empleados list
//! ```

pub mod config;
pub mod gateway;
pub mod lifecycle;
pub mod model;
pub mod presentation;
pub mod shell;
pub mod validation;
pub mod workflow;
