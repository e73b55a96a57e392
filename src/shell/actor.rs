use super::{
    DeleteOutcome, ModalView, ShellClient, ShellError, ShellRequest, SubmitOutcome,
};
use crate::gateway::SharedGateway;
use crate::model::{Empleado, EmpleadoField, EmpleadoId};
use crate::presentation::{Confirmation, Prompt};
use crate::workflow::{FormWorkflow, WorkflowError, WorkflowKind};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Dependencies the shell reaches through while handling requests.
#[derive(Clone)]
pub struct ShellContext {
    pub gateway: SharedGateway,
    pub prompt: Arc<dyn Prompt>,
}

/// Owns the collection and the (at most one) open form.
///
/// Requests are handled one at a time, so a second submit always observes the
/// outcome of the first.
pub struct ShellActor {
    receiver: mpsc::Receiver<ShellRequest>,
    empleados: Vec<Empleado>,
    modal: Option<FormWorkflow>,
}

impl ShellActor {
    pub fn new(buffer_size: usize) -> (Self, ShellClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            empleados: Vec::new(),
            modal: None,
        };
        (actor, ShellClient::new(sender))
    }

    /// Runs the event loop until every client is dropped.
    ///
    /// The context is injected here rather than in [`ShellActor::new`], so
    /// the client can exist before its dependencies do.
    pub async fn run(mut self, context: ShellContext) {
        info!("Shell started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ShellRequest::Refresh { respond_to } => {
                    let _ = respond_to.send(self.refresh(&context).await);
                }
                ShellRequest::Empleados { respond_to } => {
                    let _ = respond_to.send(Ok(self.empleados.clone()));
                }
                ShellRequest::OpenCreate { respond_to } => {
                    let _ = respond_to.send(self.open_create(&context));
                }
                ShellRequest::OpenEdit { id, respond_to } => {
                    let _ = respond_to.send(self.open_edit(&context, id).await);
                }
                ShellRequest::Modal { respond_to } => {
                    let _ = respond_to.send(Ok(self.modal.as_ref().map(ModalView::from)));
                }
                ShellRequest::SetField {
                    field,
                    value,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.set_field(field, &value));
                }
                ShellRequest::Submit { respond_to } => {
                    let _ = respond_to.send(self.submit(&context).await);
                }
                ShellRequest::Cancel { respond_to } => {
                    let _ = respond_to.send(self.cancel());
                }
                ShellRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.delete(&context, id).await);
                }
            }
        }

        info!(size = self.empleados.len(), "Shutdown");
    }

    async fn refresh(&mut self, context: &ShellContext) -> Result<Vec<Empleado>, ShellError> {
        match context.gateway.list().await {
            Ok(empleados) => {
                self.empleados = empleados;
                info!(size = self.empleados.len(), "Refreshed");
                Ok(self.empleados.clone())
            }
            Err(e) => {
                warn!(
                    error = %e,
                    size = self.empleados.len(),
                    "Refresh failed, keeping previous list"
                );
                Err(e.into())
            }
        }
    }

    fn ensure_no_modal(&self) -> Result<(), ShellError> {
        match &self.modal {
            Some(open) => {
                warn!(kind = ?open.kind(), "Form already open");
                Err(ShellError::ModalOpen)
            }
            None => Ok(()),
        }
    }

    fn open_create(&mut self, context: &ShellContext) -> Result<ModalView, ShellError> {
        self.ensure_no_modal()?;
        let workflow = FormWorkflow::create(context.gateway.clone());
        debug!("Create form opened");
        let view = ModalView::from(&workflow);
        self.modal = Some(workflow);
        Ok(view)
    }

    /// A failed load still opens the form; the error travels in the view.
    ///
    /// With an edit form already open, the form is pointed at `id` instead
    /// and reloads only if the id changed. Any other open form is
    /// `ModalOpen`.
    async fn open_edit(
        &mut self,
        context: &ShellContext,
        id: EmpleadoId,
    ) -> Result<ModalView, ShellError> {
        if let Some(modal) = self.modal.as_mut() {
            if !matches!(modal.kind(), WorkflowKind::Edit(_)) {
                warn!(kind = ?modal.kind(), "Form already open");
                return Err(ShellError::ModalOpen);
            }
            match modal.retarget(id).await {
                Ok(()) => {}
                Err(WorkflowError::LoadFailed(e)) => {
                    debug!(%id, error = %e, "Edit form retargeted without data");
                }
                Err(e) => return Err(e.into()),
            }
            return Ok(ModalView::from(&*modal));
        }

        let mut workflow = FormWorkflow::edit(context.gateway.clone(), id);
        if let Err(e) = workflow.load().await {
            debug!(%id, error = %e, "Edit form opened without data");
        }
        let view = ModalView::from(&workflow);
        self.modal = Some(workflow);
        Ok(view)
    }

    fn set_field(&mut self, field: EmpleadoField, value: &str) -> Result<ModalView, ShellError> {
        let modal = self.modal.as_mut().ok_or(ShellError::NoModal)?;
        modal.set_field(field, value)?;
        Ok(ModalView::from(&*modal))
    }

    async fn submit(&mut self, context: &ShellContext) -> Result<SubmitOutcome, ShellError> {
        let modal = self.modal.as_mut().ok_or(ShellError::NoModal)?;
        modal.submit().await?;

        self.modal = None;
        match self.refresh(context).await {
            Ok(_) => Ok(SubmitOutcome::Committed),
            Err(ShellError::Network(e)) => Ok(SubmitOutcome::CommittedListStale(e)),
            Err(e) => Err(e),
        }
    }

    fn cancel(&mut self) -> Result<(), ShellError> {
        let modal = self.modal.as_mut().ok_or(ShellError::NoModal)?;
        modal.cancel()?;
        self.modal = None;
        Ok(())
    }

    /// Delete is only offered from the list, so an open form blocks it.
    async fn delete(
        &mut self,
        context: &ShellContext,
        id: EmpleadoId,
    ) -> Result<DeleteOutcome, ShellError> {
        self.ensure_no_modal()?;

        if !context.prompt.confirm(&Confirmation::delete_empleado()).await {
            info!(%id, "Delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        if let Err(e) = context.gateway.delete_by_id(id).await {
            warn!(%id, error = %e, "Delete failed");
            return Err(e.into());
        }
        info!(%id, "Deleted");

        match self.refresh(context).await {
            Ok(_) => Ok(DeleteOutcome::Deleted),
            Err(ShellError::Network(e)) => Ok(DeleteOutcome::DeletedListStale(e)),
            Err(e) => Err(e),
        }
    }
}
