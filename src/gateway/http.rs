//! HTTP implementation of [`EmpleadoGateway`] over `reqwest`.

use super::{paths, EmpleadoGateway, NetworkError, Operation};
use crate::config::{ConfigError, Settings};
use crate::model::{Empleado, EmpleadoCreate, EmpleadoId};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

/// Gateway talking JSON to the Empleado REST API.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    /// Build a gateway for `base_url` using the transport's default timeout.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Self::from_settings(&Settings::new(base_url)?)
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self {
            client,
            base_url: settings.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Send the request and turn anything but a 2xx into a failure.
    async fn send(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> Result<Response, NetworkError> {
        let response = request.send().await.map_err(|e| {
            warn!(%operation, error = %e, "Transport failure");
            NetworkError::request_failed(operation, e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%operation, %status, "Non-success status");
            return Err(NetworkError::request_failed(operation, format!("HTTP {status}")));
        }
        debug!(%operation, %status, "Request ok");
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(
        operation: Operation,
        response: Response,
    ) -> Result<T, NetworkError> {
        response
            .json::<T>()
            .await
            .map_err(|e| NetworkError::request_failed(operation, format!("invalid body: {e}")))
    }
}

#[async_trait]
impl EmpleadoGateway for HttpGateway {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Empleado>, NetworkError> {
        let request = self.client.get(self.url(paths::LIST));
        let response = self.send(Operation::List, request).await?;
        Self::decode(Operation::List, response).await
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: EmpleadoId) -> Result<Empleado, NetworkError> {
        let request = self.client.get(self.url(&format!("{}/{}", paths::GET, id)));
        let response = self.send(Operation::GetById, request).await?;
        Self::decode(Operation::GetById, response).await
    }

    #[instrument(skip(self))]
    async fn create(&self, params: &EmpleadoCreate) -> Result<(), NetworkError> {
        let request = self.client.post(self.url(paths::CREATE)).json(params);
        self.send(Operation::Create, request).await?;
        Ok(())
    }

    #[instrument(skip(self), fields(id = ?empleado.id_empleado))]
    async fn update(&self, empleado: &Empleado) -> Result<(), NetworkError> {
        let request = self.client.put(self.url(paths::UPDATE)).json(empleado);
        self.send(Operation::Update, request).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: EmpleadoId) -> Result<(), NetworkError> {
        let request = self.client.delete(self.url(&format!("{}/{}", paths::DELETE, id)));
        self.send(Operation::DeleteById, request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_base_url_is_normalized() {
        let gateway = HttpGateway::new("http://localhost:5000/api/").unwrap();
        assert_eq!(gateway.base_url(), "http://localhost:5000/api");
        assert_eq!(gateway.url(paths::LIST), "http://localhost:5000/api/Empleado/Lista");

        let gateway = HttpGateway::new("http://localhost:5000/api").unwrap();
        assert_eq!(gateway.url(paths::CREATE), "http://localhost:5000/api/Empleado/Nuevo");
    }

    #[test]
    fn test_from_settings_with_timeout() {
        let settings = Settings::new("http://localhost:5000/api/")
            .unwrap()
            .with_timeout(Duration::from_secs(5));
        let gateway = HttpGateway::from_settings(&settings).unwrap();
        assert_eq!(gateway.base_url(), "http://localhost:5000/api");
    }
}
