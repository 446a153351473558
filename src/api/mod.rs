//! API handlers for Biblioteca REST endpoints

pub mod books;
pub mod health;
pub mod loans;
pub mod openapi;
pub mod students;

#[cfg(test)]
mod test_support;

use std::any::Any;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::{AppError, AppResult, MessageResponse},
    AppState,
};

/// Answer sent when a handler panics before producing its own response
const UNEXPECTED_FAILURE: &str =
    "Não foi possível processar a requisição. Entre em contato com o administrador do sistema.";

/// Failed controller operation, answered with an operation-specific message
#[derive(Debug)]
pub struct ApiFailure {
    status: StatusCode,
    message: &'static str,
}

impl ApiFailure {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        (self.status, Json(MessageResponse::new(self.message))).into_response()
    }
}

impl AppState {
    /// Turn an error into the response for a failed operation.
    /// The error detail has already been logged where it happened.
    pub fn fail(&self, err: AppError, message: &'static str) -> ApiFailure {
        ApiFailure {
            status: err.status_code(self.config.api.typed_status_codes),
            message,
        }
    }
}

/// Parse an identifier taken from the path
pub fn parse_id(raw: &str) -> AppResult<i32> {
    raw.trim().parse::<i32>().map_err(|_| {
        let err = AppError::Validation(format!("Invalid identifier '{}'", raw));
        err.log("Rejected request path");
        err
    })
}

/// Identifier from the path, whether the segment failed to decode or to parse
pub fn path_id(path: Result<Path<String>, PathRejection>) -> AppResult<i32> {
    match path {
        Ok(Path(raw)) => parse_id(&raw),
        Err(rejection) => {
            let err = AppError::Validation(rejection.body_text());
            err.log("Rejected request path");
            Err(err)
        }
    }
}

/// Convert a JSON body rejection into an application error
pub fn body_error(rejection: JsonRejection) -> AppError {
    let err = AppError::BadRequest(rejection.body_text());
    err.log("Rejected request body");
    err
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(panic = %detail, "Request handler panicked");

    (
        StatusCode::BAD_REQUEST,
        Json(MessageResponse::new(UNEXPECTED_FAILURE)),
    )
        .into_response()
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(health::greeting))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/lista/livros", get(books::list_books))
        .route("/novo/livro", post(books::create_book))
        .route("/delete/livro/:id", delete(books::delete_book))
        .route("/atualizar/livro/:id", put(books::update_book))
        // Students
        .route("/lista/alunos", get(students::list_students))
        .route("/novo/aluno", post(students::create_student))
        .route("/delete/aluno/:id", delete(students::delete_student))
        .route("/atualizar/aluno/:id", put(students::update_student))
        // Loans
        .route("/lista/emprestimo", get(loans::list_loans))
        .route("/novo/emprestimo", post(loans::create_loan))
        .route("/delete/emprestimo/:id", delete(loans::delete_loan))
        .route("/atualizar/emprestimo/:id", put(loans::update_loan))
        .with_state(state);

    with_layers(
        Router::new()
            .merge(routes)
            .merge(openapi::create_openapi_router()),
    )
}

/// Panic fallback, request tracing and CORS around every route
fn with_layers(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
