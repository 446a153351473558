//! Router harness backed by mocked repositories

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::{
    config::AppConfig,
    repository::{
        MockBookRepository, MockConnectionProvider, MockLoanRepository, MockStudentRepository,
        Repository,
    },
    services::Services,
    AppState,
};

pub struct TestApp {
    pub connection: MockConnectionProvider,
    pub books: MockBookRepository,
    pub students: MockStudentRepository,
    pub loans: MockLoanRepository,
    config: AppConfig,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            connection: MockConnectionProvider::new(),
            books: MockBookRepository::new(),
            students: MockStudentRepository::new(),
            loans: MockLoanRepository::new(),
            config: AppConfig::default(),
        }
    }

    pub fn typed_status_codes(mut self) -> Self {
        self.config.api.typed_status_codes = true;
        self
    }

    pub fn router(self) -> Router {
        let repository = Repository::from_parts(
            Arc::new(self.connection),
            Arc::new(self.books),
            Arc::new(self.students),
            Arc::new(self.loans),
        );
        let state = AppState {
            config: Arc::new(self.config),
            services: Arc::new(Services::new(repository)),
        };
        super::create_router(state)
    }
}

/// Send a request with an optional JSON body and decode the JSON answer
pub async fn send(
    router: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let body = body.map(|v| v.to_string());
    send_raw(router, method, uri, body.as_deref()).await
}

/// Send a request with a raw body, which need not be valid JSON
pub async fn send_raw(
    router: Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(text) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(text.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
