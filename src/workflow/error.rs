//! Error types for the form workflow.

use super::WorkflowState;
use crate::gateway::NetworkError;
use crate::validation::ValidationError;
use thiserror::Error;

/// Errors that can occur while a create or edit form is open.
///
/// The `Display` text is what the user sees.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WorkflowError {
    /// The draft broke a business rule; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The record to edit could not be fetched.
    #[error("No se pudo cargar el empleado")]
    LoadFailed(#[source] NetworkError),

    /// The backend rejected or never received a create.
    #[error("No se pudo guardar el empleado")]
    CreateFailed(#[source] NetworkError),

    /// The backend rejected or never received an update.
    #[error("No se pudo editar el empleado")]
    UpdateFailed(#[source] NetworkError),

    /// The operation is not allowed in the current state.
    #[error("El formulario no admite esta operación en estado {0}")]
    NotEditable(WorkflowState),
}
