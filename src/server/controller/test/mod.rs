//! Handler tests driving the full router with `tower::ServiceExt::oneshot`.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{
    data::{address::AddressRepository, student::StudentRepository},
    error::repository::RepositoryError,
    model::{
        address::{Address, CreateAddressParam, UpdateAddressParam},
        student::{CreateStudentParam, Student, UpdateStudentParam},
    },
    router,
    state::AppState,
};


fn app(db: &DatabaseConnection) -> Router {
    router::router().with_state(AppState::from_database(db.clone()))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Sends a request through the router and decodes the JSON body, if any.
async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Option<Value>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        None
    } else {
        Some(serde_json::from_slice(&bytes).unwrap())
    };

    (status, headers, body)
}

fn transport_error() -> RepositoryError {
    RepositoryError::Transport(DbErr::Custom("connection lost".to_string()))
}

fn sample_student(student_id: i32) -> Student {
    Student {
        student_id,
        first_name: "Ada".to_string(),
        middle_name: None,
        last_name: "Lovelace".to_string(),
        email_address: None,
        phone_number: None,
        time_created: chrono::Utc::now(),
    }
}

fn sample_address(address_id: i32) -> Address {
    Address {
        address_id,
        student_id: 1,
        street_number: 12,
        street: "Symonds Street".to_string(),
        suburb: "Grafton".to_string(),
        city: "Auckland".to_string(),
        post_code: 1010,
        country: "New Zealand".to_string(),
        time_created: chrono::Utc::now(),
    }
}

/// Repository whose reads find every record and whose writes always fail.
///
/// Counts every call so tests can assert the store was never reached.
#[derive(Default)]
struct FailingRepository {
    calls: AtomicUsize,
}

impl FailingRepository {
    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StudentRepository for FailingRepository {
    async fn list(&self) -> Result<Vec<Student>, RepositoryError> {
        self.record();
        Err(transport_error())
    }

    async fn get(&self, student_id: i32) -> Result<Option<Student>, RepositoryError> {
        self.record();
        Ok(Some(sample_student(student_id)))
    }

    async fn exists(&self, _student_id: i32) -> Result<bool, RepositoryError> {
        self.record();
        Ok(true)
    }

    async fn create(&self, _param: CreateStudentParam) -> Result<Student, RepositoryError> {
        self.record();
        Err(transport_error())
    }

    async fn update(&self, _param: UpdateStudentParam) -> Result<Student, RepositoryError> {
        self.record();
        Err(transport_error())
    }

    async fn delete(&self, _student: Student) -> Result<(), RepositoryError> {
        self.record();
        Err(transport_error())
    }
}

#[async_trait]
impl AddressRepository for FailingRepository {
    async fn list(&self) -> Result<Vec<Address>, RepositoryError> {
        self.record();
        Err(transport_error())
    }

    async fn list_by_student(&self, _student_id: i32) -> Result<Vec<Address>, RepositoryError> {
        self.record();
        Err(transport_error())
    }

    async fn get(&self, address_id: i32) -> Result<Option<Address>, RepositoryError> {
        self.record();
        Ok(Some(sample_address(address_id)))
    }

    async fn exists(&self, _address_id: i32) -> Result<bool, RepositoryError> {
        self.record();
        Ok(true)
    }

    async fn create(&self, _param: CreateAddressParam) -> Result<Address, RepositoryError> {
        self.record();
        Err(transport_error())
    }

    async fn update(&self, _param: UpdateAddressParam) -> Result<Address, RepositoryError> {
        self.record();
        Err(transport_error())
    }

    async fn delete(&self, _address: Address) -> Result<(), RepositoryError> {
        self.record();
        Err(transport_error())
    }
}

/// Builds a router whose repositories are both backed by one failing stub.
fn failing_app() -> (Router, Arc<FailingRepository>) {
    let repo = Arc::new(FailingRepository::default());
    let state = AppState::new(repo.clone(), repo.clone());

    (router::router().with_state(state), repo)
}

fn error_message(body: &Option<Value>) -> &str {
    body.as_ref()
        .and_then(|b| b["error"].as_str())
        .unwrap_or_default()
}
