//! # Persistence Gateway
//!
//! The boundary between the client and the Empleado REST API.
//!
//! ## Key Types
//!
//! - [`EmpleadoGateway`]: The trait every backend implementation satisfies.
//! - [`HttpGateway`]: The production implementation over `reqwest`.
//! - [`mock::MockGateway`]: An expectation-driven double for tests.
//! - [`NetworkError`]: The single failure kind every operation reports.
//!
//! Each operation is exactly one call: no retry, no idempotency key, no cache.

pub mod error;
pub mod http;
pub mod mock;

pub use error::*;
pub use http::HttpGateway;

use crate::model::{Empleado, EmpleadoCreate, EmpleadoId};
use async_trait::async_trait;
use std::sync::Arc;

/// Relative paths of the backend endpoints.
pub mod paths {
    pub const LIST: &str = "Empleado/Lista";
    pub const GET: &str = "Empleado/Obtener";
    pub const CREATE: &str = "Empleado/Nuevo";
    pub const UPDATE: &str = "Empleado/Editar";
    pub const DELETE: &str = "Empleado/Eliminar";
}

/// CRUD access to the remote collection of employees.
///
/// Implementations report any non-success outcome as
/// [`NetworkError::RequestFailed`]; callers decide how to surface it.
#[async_trait]
pub trait EmpleadoGateway: Send + Sync {
    /// Fetch the whole collection.
    async fn list(&self) -> Result<Vec<Empleado>, NetworkError>;

    /// Fetch one record. Used by the edit workflow's initial load.
    async fn get_by_id(&self, id: EmpleadoId) -> Result<Empleado, NetworkError>;

    /// Persist a new record. The assigned id is learned by re-listing.
    async fn create(&self, params: &EmpleadoCreate) -> Result<(), NetworkError>;

    /// Replace an existing record, identified by its `id_empleado`.
    async fn update(&self, empleado: &Empleado) -> Result<(), NetworkError>;

    /// Remove a record.
    async fn delete_by_id(&self, id: EmpleadoId) -> Result<(), NetworkError>;
}

/// A gateway shared between the shell and the workflows it opens.
pub type SharedGateway = Arc<dyn EmpleadoGateway>;
