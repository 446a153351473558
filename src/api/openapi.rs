//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, loans, students};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblioteca API",
        version = "0.1.0",
        description = "Library management REST API: books, students and loans"
    ),
    paths(
        // Health
        health::greeting,
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::create_book,
        books::delete_book,
        books::update_book,
        // Students
        students::list_students,
        students::create_student,
        students::delete_student,
        students::update_student,
        // Loans
        loans::list_loans,
        loans::create_loan,
        loans::delete_loan,
        loans::update_loan,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::BookPayload,
            crate::models::student::Student,
            crate::models::student::StudentPayload,
            crate::models::loan::Loan,
            crate::models::loan::LoanPayload,
            health::HealthResponse,
            crate::error::MessageResponse,
        )
    ),
    tags(
        (name = "health", description = "Greeting and health check endpoints"),
        (name = "books", description = "Book management"),
        (name = "students", description = "Student management"),
        (name = "loans", description = "Loan management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
