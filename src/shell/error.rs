//! Error types for the shell.

use crate::gateway::NetworkError;
use crate::workflow::WorkflowError;
use thiserror::Error;

/// Errors that can occur during shell operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShellError {
    /// The shell task is gone; requests can no longer be sent.
    #[error("Shell closed")]
    ActorClosed,

    /// The shell task dropped the response channel.
    #[error("Shell dropped response channel")]
    ActorDropped,

    /// A form is already open.
    #[error("Ya hay un formulario abierto")]
    ModalOpen,

    /// The operation needs an open form and there is none.
    #[error("No hay ningún formulario abierto")]
    NoModal,

    /// The open form rejected the operation.
    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    /// A collection-level backend call failed.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// The shell task panicked or was cancelled.
    #[error("Shell task failed: {0}")]
    TaskFailed(String),
}
