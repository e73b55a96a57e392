//! # Shell Messages
//!
//! The requests a [`ShellClient`](super::ShellClient) sends to the
//! [`ShellActor`](super::ShellActor), and the views it gets back.

use super::ShellError;
use crate::gateway::NetworkError;
use crate::model::{Empleado, EmpleadoField, EmpleadoId};
use crate::workflow::{FormWorkflow, WorkflowError, WorkflowKind, WorkflowState};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the shell.
pub type Response<T> = oneshot::Sender<Result<T, ShellError>>;

#[derive(Debug)]
pub enum ShellRequest {
    Refresh {
        respond_to: Response<Vec<Empleado>>,
    },
    Empleados {
        respond_to: Response<Vec<Empleado>>,
    },
    OpenCreate {
        respond_to: Response<ModalView>,
    },
    OpenEdit {
        id: EmpleadoId,
        respond_to: Response<ModalView>,
    },
    Modal {
        respond_to: Response<Option<ModalView>>,
    },
    SetField {
        field: EmpleadoField,
        value: String,
        respond_to: Response<ModalView>,
    },
    Submit {
        respond_to: Response<SubmitOutcome>,
    },
    Cancel {
        respond_to: Response<()>,
    },
    Delete {
        id: EmpleadoId,
        respond_to: Response<DeleteOutcome>,
    },
}

/// A snapshot of the open form.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalView {
    pub title: String,
    pub kind: WorkflowKind,
    pub state: WorkflowState,
    pub draft: Empleado,
    pub error: Option<WorkflowError>,
}

impl From<&FormWorkflow> for ModalView {
    fn from(workflow: &FormWorkflow) -> Self {
        Self {
            title: workflow.title(),
            kind: workflow.kind(),
            state: workflow.state(),
            draft: workflow.draft().clone(),
            error: workflow.last_error().cloned(),
        }
    }
}

/// Result of a successful submit.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Saved, form closed, collection refreshed.
    Committed,
    /// Saved and form closed, but the follow-up refresh failed.
    CommittedListStale(NetworkError),
}

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The user said no; nothing was sent.
    Declined,
    /// Deleted and collection refreshed.
    Deleted,
    /// Deleted, but the follow-up refresh failed.
    DeletedListStale(NetworkError),
}
