//! `HttpGateway` against an in-process fake of the Empleado API.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use empleado_crud::gateway::{EmpleadoGateway, HttpGateway, NetworkError, Operation};
use empleado_crud::model::{Empleado, EmpleadoId};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// Every request the fake received, as `"METHOD path"`, plus JSON bodies.
#[derive(Clone, Default)]
struct Backend {
    requests: Arc<Mutex<Vec<String>>>,
    bodies: Arc<Mutex<Vec<Value>>>,
}

impl Backend {
    fn record(&self, request: String, body: Option<Value>) {
        self.requests.lock().unwrap().push(request);
        if let Some(body) = body {
            self.bodies.lock().unwrap().push(body);
        }
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().unwrap().clone()
    }
}

async fn lista(State(backend): State<Backend>) -> Json<Value> {
    backend.record("GET /api/Empleado/Lista".to_string(), None);
    Json(json!([
        { "idEmpleado": 1, "nombre": "Ana", "correo": "ana@empresa.com", "sueldo": 1500 },
        { "idEmpleado": 0, "nombre": "Sin id", "correo": "x@y.com", "sueldo": 10.5 }
    ]))
}

async fn obtener(
    State(backend): State<Backend>,
    Path(id): Path<u32>,
) -> Result<Json<Value>, StatusCode> {
    backend.record(format!("GET /api/Empleado/Obtener/{id}"), None);
    if id == 404 {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({
        "idEmpleado": id,
        "nombre": "Luis",
        "correo": "luis@empresa.com",
        "sueldo": 2100.0
    })))
}

async fn nuevo(State(backend): State<Backend>, Json(body): Json<Value>) -> StatusCode {
    backend.record("POST /api/Empleado/Nuevo".to_string(), Some(body));
    StatusCode::OK
}

async fn editar(State(backend): State<Backend>, Json(body): Json<Value>) -> StatusCode {
    backend.record("PUT /api/Empleado/Editar".to_string(), Some(body));
    StatusCode::OK
}

async fn eliminar(State(backend): State<Backend>, Path(id): Path<u32>) -> StatusCode {
    backend.record(format!("DELETE /api/Empleado/Eliminar/{id}"), None);
    StatusCode::OK
}

/// Serves `router` on an ephemeral port and returns the API base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api/")
}

async fn fake_api() -> (HttpGateway, Backend) {
    let backend = Backend::default();
    let router = Router::new()
        .route("/api/Empleado/Lista", get(lista))
        .route("/api/Empleado/Obtener/{id}", get(obtener))
        .route("/api/Empleado/Nuevo", post(nuevo))
        .route("/api/Empleado/Editar", put(editar))
        .route("/api/Empleado/Eliminar/{id}", delete(eliminar))
        .with_state(backend.clone());
    let base_url = serve(router).await;
    (HttpGateway::new(&base_url).unwrap(), backend)
}

#[tokio::test]
async fn test_list_decodes_collection() {
    let (gateway, backend) = fake_api().await;

    let empleados = gateway.list().await.unwrap();
    assert_eq!(
        empleados,
        vec![
            Empleado::new("Ana", "ana@empresa.com", 1500.0).with_id(EmpleadoId(1)),
            Empleado::new("Sin id", "x@y.com", 10.5),
        ]
    );
    assert_eq!(backend.requests(), vec!["GET /api/Empleado/Lista"]);
}

#[tokio::test]
async fn test_get_by_id_hits_obtener() {
    let (gateway, backend) = fake_api().await;

    let empleado = gateway.get_by_id(EmpleadoId(7)).await.unwrap();
    assert_eq!(empleado.id_empleado, Some(EmpleadoId(7)));
    assert_eq!(empleado.nombre, "Luis");
    assert_eq!(backend.requests(), vec!["GET /api/Empleado/Obtener/7"]);
}

#[tokio::test]
async fn test_create_posts_payload_without_id() {
    let (gateway, backend) = fake_api().await;

    let draft = Empleado::new("Ana", "ana@empresa.com", 1500.0);
    gateway.create(&draft.to_create()).await.unwrap();

    assert_eq!(backend.requests(), vec!["POST /api/Empleado/Nuevo"]);
    let body = &backend.bodies()[0];
    assert_eq!(
        body,
        &json!({ "nombre": "Ana", "correo": "ana@empresa.com", "sueldo": 1500.0 })
    );
    assert!(body.get("idEmpleado").is_none());
}

#[tokio::test]
async fn test_update_puts_full_record_with_id() {
    let (gateway, backend) = fake_api().await;

    let empleado = Empleado::new("Luis", "luis@empresa.com", 2200.0).with_id(EmpleadoId(7));
    gateway.update(&empleado).await.unwrap();

    assert_eq!(backend.requests(), vec!["PUT /api/Empleado/Editar"]);
    assert_eq!(
        backend.bodies(),
        vec![json!({
            "idEmpleado": 7,
            "nombre": "Luis",
            "correo": "luis@empresa.com",
            "sueldo": 2200.0
        })]
    );
}

#[tokio::test]
async fn test_delete_hits_eliminar() {
    let (gateway, backend) = fake_api().await;

    gateway.delete_by_id(EmpleadoId(3)).await.unwrap();
    assert_eq!(backend.requests(), vec!["DELETE /api/Empleado/Eliminar/3"]);
}

#[tokio::test]
async fn test_non_success_status_is_request_failed() {
    let (gateway, _backend) = fake_api().await;

    let err = gateway.get_by_id(EmpleadoId(404)).await.unwrap_err();
    assert_eq!(
        err,
        NetworkError::request_failed(Operation::GetById, "HTTP 404 Not Found")
    );
}

#[tokio::test]
async fn test_server_error_fails_every_operation() {
    let router = Router::new().fallback(|| async { StatusCode::INTERNAL_SERVER_ERROR });
    let gateway = HttpGateway::new(&serve(router).await).unwrap();
    let empleado = Empleado::new("Ana", "ana@empresa.com", 1.0).with_id(EmpleadoId(1));

    assert_eq!(gateway.list().await.unwrap_err().operation(), Operation::List);
    assert_eq!(
        gateway.create(&empleado.to_create()).await.unwrap_err().operation(),
        Operation::Create
    );
    assert_eq!(
        gateway.update(&empleado).await.unwrap_err().operation(),
        Operation::Update
    );
    assert_eq!(
        gateway.delete_by_id(EmpleadoId(1)).await.unwrap_err().operation(),
        Operation::DeleteById
    );
}

#[tokio::test]
async fn test_unreachable_backend_is_request_failed() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let gateway = HttpGateway::new(&format!("http://{addr}/api")).unwrap();
    let err = gateway.list().await.unwrap_err();
    assert_eq!(err.operation(), Operation::List);
}
