use super::{DeleteOutcome, ModalView, Response, ShellError, ShellRequest, SubmitOutcome};
use crate::model::{Empleado, EmpleadoField, EmpleadoId};
use tokio::sync::{mpsc, oneshot};
use tracing::instrument;

/// Handle for talking to a running [`ShellActor`](super::ShellActor).
///
/// Cheap to clone; the actor stops once every clone is dropped.
#[derive(Clone)]
pub struct ShellClient {
    sender: mpsc::Sender<ShellRequest>,
}

impl ShellClient {
    pub fn new(sender: mpsc::Sender<ShellRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> ShellRequest,
    ) -> Result<T, ShellError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ShellError::ActorClosed)?;
        response.await.map_err(|_| ShellError::ActorDropped)?
    }

    /// Re-fetches the collection. On failure the previous one is kept.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<Vec<Empleado>, ShellError> {
        self.request(|respond_to| ShellRequest::Refresh { respond_to })
            .await
    }

    /// The collection as of the last successful refresh.
    pub async fn empleados(&self) -> Result<Vec<Empleado>, ShellError> {
        self.request(|respond_to| ShellRequest::Empleados { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn open_create(&self) -> Result<ModalView, ShellError> {
        self.request(|respond_to| ShellRequest::OpenCreate { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn open_edit(&self, id: EmpleadoId) -> Result<ModalView, ShellError> {
        self.request(|respond_to| ShellRequest::OpenEdit { id, respond_to })
            .await
    }

    pub async fn modal(&self) -> Result<Option<ModalView>, ShellError> {
        self.request(|respond_to| ShellRequest::Modal { respond_to })
            .await
    }

    pub async fn set_field(
        &self,
        field: EmpleadoField,
        value: impl Into<String>,
    ) -> Result<ModalView, ShellError> {
        let value = value.into();
        self.request(|respond_to| ShellRequest::SetField {
            field,
            value,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn submit(&self) -> Result<SubmitOutcome, ShellError> {
        self.request(|respond_to| ShellRequest::Submit { respond_to })
            .await
    }

    pub async fn cancel(&self) -> Result<(), ShellError> {
        self.request(|respond_to| ShellRequest::Cancel { respond_to })
            .await
    }

    /// Asks for confirmation, then deletes and refreshes.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: EmpleadoId) -> Result<DeleteOutcome, ShellError> {
        self.request(|respond_to| ShellRequest::Delete { id, respond_to })
            .await
    }
}
