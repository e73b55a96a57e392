//! # Mock Gateway
//!
//! An in-memory [`EmpleadoGateway`] for testing workflows and the shell
//! without a backend.
//!
//! Queue up the calls you expect, in order, with the result each should
//! produce. Every call the code under test makes pops the next expectation;
//! a call that does not match it panics. [`MockGateway::calls`] returns the
//! log of calls received, including payloads, and [`MockGateway::verify`]
//! fails the test if expectations are left over.
//!
//! ```ignore
//! let mock = MockGateway::new();
//! mock.expect_list().return_ok(vec![]);
//! mock.expect_create().return_ok(());
//! mock.expect_list().return_ok(vec![ana.with_id(EmpleadoId(1))]);
//!
//! let gateway: SharedGateway = Arc::new(mock.clone());
//! // Drive the code under test...
//! mock.verify();
//! ```
//!
//! Clones share the same queue and call log, so keep one handle for
//! assertions and hand a clone to the code under test.

use super::{EmpleadoGateway, NetworkError};
use crate::model::{Empleado, EmpleadoCreate, EmpleadoId};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// An expected gateway call and the result it returns.
enum Expectation {
    List {
        response: Result<Vec<Empleado>, NetworkError>,
    },
    GetById {
        id: EmpleadoId,
        response: Result<Empleado, NetworkError>,
    },
    Create {
        response: Result<(), NetworkError>,
    },
    Update {
        response: Result<(), NetworkError>,
    },
    DeleteById {
        id: EmpleadoId,
        response: Result<(), NetworkError>,
    },
}

/// A call received by the mock, with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    List,
    GetById(EmpleadoId),
    Create(EmpleadoCreate),
    Update(Empleado),
    DeleteById(EmpleadoId),
}

type Queue = Arc<Mutex<VecDeque<Expectation>>>;

/// A gateway double with expectation tracking.
#[derive(Clone, Default)]
pub struct MockGateway {
    expectations: Queue,
    calls: Arc<Mutex<Vec<GatewayCall>>>,
}

impl MockGateway {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `list` call.
    pub fn expect_list(&self) -> ExpectationBuilder<Vec<Empleado>> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::List { response })
    }

    /// Expects a `get_by_id` call for `id`.
    pub fn expect_get(&self, id: EmpleadoId) -> ExpectationBuilder<Empleado> {
        ExpectationBuilder::new(&self.expectations, move |response| {
            Expectation::GetById { id, response }
        })
    }

    /// Expects a `create` call.
    pub fn expect_create(&self) -> ExpectationBuilder<()> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Create { response })
    }

    /// Expects an `update` call.
    pub fn expect_update(&self) -> ExpectationBuilder<()> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Update { response })
    }

    /// Expects a `delete_by_id` call for `id`.
    pub fn expect_delete(&self, id: EmpleadoId) -> ExpectationBuilder<()> {
        ExpectationBuilder::new(&self.expectations, move |response| {
            Expectation::DeleteById { id, response }
        })
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    /// How many received calls match `predicate`.
    pub fn count(&self, predicate: impl Fn(&GatewayCall) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| predicate(c)).count()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn next(&self, call: GatewayCall) -> Expectation {
        self.calls.lock().unwrap().push(call.clone());
        let mut exps = self.expectations.lock().unwrap();
        match exps.pop_front() {
            Some(expectation) => expectation,
            None => panic!("Unexpected gateway call: {call:?}"),
        }
    }
}

/// Builder returned by the `expect_*` methods.
pub struct ExpectationBuilder<T> {
    expectations: Queue,
    make: Box<dyn FnOnce(Result<T, NetworkError>) -> Expectation + Send>,
}

impl<T> ExpectationBuilder<T> {
    fn new(
        expectations: &Queue,
        make: impl FnOnce(Result<T, NetworkError>) -> Expectation + Send + 'static,
    ) -> Self {
        Self {
            expectations: expectations.clone(),
            make: Box::new(make),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: NetworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, NetworkError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

#[async_trait]
impl EmpleadoGateway for MockGateway {
    async fn list(&self) -> Result<Vec<Empleado>, NetworkError> {
        match self.next(GatewayCall::List) {
            Expectation::List { response } => response,
            _ => panic!("Unexpected request or expectation mismatch: list"),
        }
    }

    async fn get_by_id(&self, id: EmpleadoId) -> Result<Empleado, NetworkError> {
        match self.next(GatewayCall::GetById(id)) {
            Expectation::GetById { id: expected, response } => {
                assert_eq!(id, expected, "get_by_id called with unexpected id");
                response
            }
            _ => panic!("Unexpected request or expectation mismatch: get_by_id({id})"),
        }
    }

    async fn create(&self, params: &EmpleadoCreate) -> Result<(), NetworkError> {
        match self.next(GatewayCall::Create(params.clone())) {
            Expectation::Create { response } => response,
            _ => panic!("Unexpected request or expectation mismatch: create"),
        }
    }

    async fn update(&self, empleado: &Empleado) -> Result<(), NetworkError> {
        match self.next(GatewayCall::Update(empleado.clone())) {
            Expectation::Update { response } => response,
            _ => panic!("Unexpected request or expectation mismatch: update"),
        }
    }

    async fn delete_by_id(&self, id: EmpleadoId) -> Result<(), NetworkError> {
        match self.next(GatewayCall::DeleteById(id)) {
            Expectation::DeleteById { id: expected, response } => {
                assert_eq!(id, expected, "delete_by_id called with unexpected id");
                response
            }
            _ => panic!("Unexpected request or expectation mismatch: delete_by_id({id})"),
        }
    }
}
