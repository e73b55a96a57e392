//! # Form Workflow
//!
//! The create and edit interactions share one state machine,
//! [`FormWorkflow`], and one validator. They differ only in how the draft is
//! initialized and which gateway call commits it.
//!
//! ```text
//! Loading (edit only) ──► Editing ──submit──► Submitting ──ok──► Committed
//!        │                 ▲   │                   │
//!        │                 │   │                   └─fail─► Editing (error kept)
//!        └─────cancel──────┴───┴──cancel──► Closed
//! ```
//!
//! `Committed` and `Closed` are terminal.

pub mod error;
pub mod form;

pub use error::*;
pub use form::FormWorkflow;

use crate::model::EmpleadoId;
use strum::Display;

/// Which flow a workflow runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowKind {
    Create,
    Edit(EmpleadoId),
}

impl WorkflowKind {
    pub fn id(&self) -> Option<EmpleadoId> {
        match self {
            WorkflowKind::Create => None,
            WorkflowKind::Edit(id) => Some(*id),
        }
    }
}

/// Where a workflow stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum WorkflowState {
    Loading,
    Editing,
    Submitting,
    Committed,
    Closed,
}

impl WorkflowState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkflowState::Committed | WorkflowState::Closed)
    }
}
