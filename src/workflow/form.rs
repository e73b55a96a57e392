use super::{WorkflowError, WorkflowKind, WorkflowState};
use crate::gateway::SharedGateway;
use crate::model::{Empleado, EmpleadoField, EmpleadoId};
use crate::validation::validate;
use tracing::{debug, info, instrument, warn};

/// An open create or edit form.
///
/// Holds the draft record and drives it through validation and persistence.
/// All mutation goes through `&mut self`, so a workflow never has two
/// submissions in flight.
pub struct FormWorkflow {
    gateway: SharedGateway,
    kind: WorkflowKind,
    draft: Empleado,
    loaded: Option<Empleado>,
    state: WorkflowState,
    last_error: Option<WorkflowError>,
}

impl FormWorkflow {
    /// Opens a create form with an empty draft.
    pub fn create(gateway: SharedGateway) -> Self {
        Self {
            gateway,
            kind: WorkflowKind::Create,
            draft: Empleado::default(),
            loaded: None,
            state: WorkflowState::Editing,
            last_error: None,
        }
    }

    /// Opens an edit form for `id`. The draft is empty until [`load`](Self::load) runs.
    pub fn edit(gateway: SharedGateway, id: EmpleadoId) -> Self {
        Self {
            gateway,
            kind: WorkflowKind::Edit(id),
            draft: Empleado::default().with_id(id),
            loaded: None,
            state: WorkflowState::Loading,
            last_error: None,
        }
    }

    pub fn kind(&self) -> WorkflowKind {
        self.kind
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn draft(&self) -> &Empleado {
        &self.draft
    }

    pub fn last_error(&self) -> Option<&WorkflowError> {
        self.last_error.as_ref()
    }

    /// Heading for the form.
    pub fn title(&self) -> String {
        match (self.kind, &self.loaded) {
            (WorkflowKind::Create, _) => "Nuevo Empleado".to_string(),
            (WorkflowKind::Edit(_), Some(loaded)) => format!("Editar Empleado - {}", loaded.nombre),
            (WorkflowKind::Edit(id), None) => format!("Editar Empleado - #{id}"),
        }
    }

    /// Fetches the record being edited into the draft.
    ///
    /// On failure the draft is reset to defaults (keeping the id), the form
    /// becomes editable, and the error is both recorded and returned.
    /// A create form has nothing to load.
    #[instrument(skip(self), fields(kind = ?self.kind))]
    pub async fn load(&mut self) -> Result<(), WorkflowError> {
        let WorkflowKind::Edit(id) = self.kind else {
            return Ok(());
        };
        if !matches!(self.state, WorkflowState::Loading | WorkflowState::Editing) {
            return Err(WorkflowError::NotEditable(self.state));
        }

        self.state = WorkflowState::Loading;
        match self.gateway.get_by_id(id).await {
            Ok(mut empleado) => {
                empleado.id_empleado = Some(id);
                debug!(?empleado, "Loaded");
                self.loaded = Some(empleado.clone());
                self.draft = empleado;
                self.state = WorkflowState::Editing;
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                warn!(%id, error = %e, "Load failed");
                self.loaded = None;
                self.draft = Empleado::default().with_id(id);
                self.state = WorkflowState::Editing;
                let error = WorkflowError::LoadFailed(e);
                self.last_error = Some(error.clone());
                Err(error)
            }
        }
    }

    /// Points an edit form at another record, reloading only if the id changed.
    pub async fn retarget(&mut self, id: EmpleadoId) -> Result<(), WorkflowError> {
        match self.kind {
            WorkflowKind::Edit(current) if current == id => Ok(()),
            WorkflowKind::Edit(_) => {
                self.kind = WorkflowKind::Edit(id);
                self.load().await
            }
            WorkflowKind::Create => Err(WorkflowError::NotEditable(self.state)),
        }
    }

    /// Merges one input value into the draft. No validation happens here.
    pub fn set_field(&mut self, field: EmpleadoField, value: &str) -> Result<(), WorkflowError> {
        if self.state != WorkflowState::Editing {
            return Err(WorkflowError::NotEditable(self.state));
        }
        self.draft.apply(field, value);
        self.last_error = None;
        Ok(())
    }

    /// Validates the draft and persists it.
    ///
    /// A validation failure leaves the draft untouched and sends nothing. A
    /// gateway failure returns the form to `Editing` so the user can retry.
    #[instrument(skip(self), fields(kind = ?self.kind))]
    pub async fn submit(&mut self) -> Result<(), WorkflowError> {
        if self.state != WorkflowState::Editing {
            return Err(WorkflowError::NotEditable(self.state));
        }

        if let Err(e) = validate(&self.draft) {
            debug!(error = %e, "Validation failed");
            let error = WorkflowError::from(e);
            self.last_error = Some(error.clone());
            return Err(error);
        }

        self.state = WorkflowState::Submitting;
        let result = match self.kind {
            WorkflowKind::Create => self
                .gateway
                .create(&self.draft.to_create())
                .await
                .map_err(WorkflowError::CreateFailed),
            WorkflowKind::Edit(id) => {
                let mut empleado = self.draft.clone();
                empleado.id_empleado = Some(id);
                self.gateway
                    .update(&empleado)
                    .await
                    .map_err(WorkflowError::UpdateFailed)
            }
        };

        match result {
            Ok(()) => {
                info!("Committed");
                self.state = WorkflowState::Committed;
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Save failed");
                self.state = WorkflowState::Editing;
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Closes the form without saving.
    pub fn cancel(&mut self) -> Result<(), WorkflowError> {
        match self.state {
            WorkflowState::Loading | WorkflowState::Editing => {
                debug!(kind = ?self.kind, "Closed");
                self.state = WorkflowState::Closed;
                self.draft = Empleado::default();
                Ok(())
            }
            state => Err(WorkflowError::NotEditable(state)),
        }
    }
}
