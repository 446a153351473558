//! Loan endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use crate::{
    error::MessageResponse,
    models::loan::{Loan, LoanPayload},
    AppState,
};

use super::{body_error, path_id, ApiFailure};

const LIST_FAILED: &str = "Não foi possível acessar a listagem de Empréstimos";
const CREATED: &str = "Empréstimo cadastrado com sucesso!";
const CREATE_FAILED: &str =
    "Não foi possível cadastrar o empréstimo. Entre em contato com o administrador do sistema.";
const REMOVED: &str = "Empréstimo removido com sucesso!";
const REMOVE_FAILED: &str =
    "Não foi possível remover o empréstimo. Entre em contato com o administrador do sistema.";
const UPDATED: &str = "Empréstimo atualizado com sucesso!";
const UPDATE_FAILED: &str =
    "Não foi possível atualizar o empréstimo. Entre em contato com o administrador do sistema.";

/// List all loans
#[utoipa::path(
    get,
    path = "/lista/emprestimo",
    tag = "loans",
    responses(
        (status = 200, description = "Loan list", body = Vec<Loan>),
        (status = 400, description = "Listing failed", body = MessageResponse)
    )
)]
pub async fn list_loans(State(state): State<AppState>) -> Result<Json<Vec<Loan>>, ApiFailure> {
    let loans = state
        .services
        .loans
        .list()
        .await
        .map_err(|e| state.fail(e, LIST_FAILED))?;
    Ok(Json(loans))
}

/// Register a new loan
#[utoipa::path(
    post,
    path = "/novo/emprestimo",
    tag = "loans",
    request_body = LoanPayload,
    responses(
        (status = 200, description = "Loan registered", body = MessageResponse),
        (status = 400, description = "Registration failed", body = MessageResponse)
    )
)]
pub async fn create_loan(
    State(state): State<AppState>,
    payload: Result<Json<LoanPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiFailure> {
    let Json(payload) = payload.map_err(|e| state.fail(body_error(e), CREATE_FAILED))?;

    state
        .services
        .loans
        .create(payload)
        .await
        .map_err(|e| state.fail(e, CREATE_FAILED))?;
    Ok(Json(MessageResponse::new(CREATED)))
}

/// Remove a loan
#[utoipa::path(
    delete,
    path = "/delete/emprestimo/{id}",
    tag = "loans",
    params(("id" = i32, Path, description = "Loan ID")),
    responses(
        (status = 200, description = "Loan removed", body = MessageResponse),
        (status = 400, description = "Nothing removed", body = MessageResponse)
    )
)]
pub async fn delete_loan(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiFailure> {
    let id = path_id(id).map_err(|e| state.fail(e, REMOVE_FAILED))?;

    state
        .services
        .loans
        .delete(id)
        .await
        .map_err(|e| state.fail(e, REMOVE_FAILED))?;
    Ok(Json(MessageResponse::new(REMOVED)))
}

/// Overwrite a loan
#[utoipa::path(
    put,
    path = "/atualizar/emprestimo/{id}",
    tag = "loans",
    params(("id" = i32, Path, description = "Loan ID")),
    request_body = LoanPayload,
    responses(
        (status = 200, description = "Loan updated", body = MessageResponse),
        (status = 400, description = "Nothing updated", body = MessageResponse)
    )
)]
pub async fn update_loan(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<LoanPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiFailure> {
    let id = path_id(id).map_err(|e| state.fail(e, UPDATE_FAILED))?;
    let Json(payload) = payload.map_err(|e| state.fail(body_error(e), UPDATE_FAILED))?;

    state
        .services
        .loans
        .update(id, payload)
        .await
        .map_err(|e| state.fail(e, UPDATE_FAILED))?;
    Ok(Json(MessageResponse::new(UPDATED)))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;
    use crate::api::test_support::{send, TestApp};

    #[tokio::test]
    async fn test_new_loan_route_reaches_loan_creation() {
        let mut app = TestApp::new();
        app.students.expect_create().never();
        app.loans
            .expect_create()
            .withf(|loan| loan.id_aluno == Some(1) && loan.id_livro == Some(2))
            .times(1)
            .returning(|_| Ok(1));

        let body = json!({
            "id_aluno": 1,
            "id_livro": 2,
            "data_emprestimo": "2024-05-02",
            "data_devolucao": "2024-05-16",
            "status_emprestimo": "ativo"
        });
        let (status, body) =
            send(app.router(), Method::POST, "/novo/emprestimo", Some(body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], CREATED);
    }

    #[tokio::test]
    async fn test_create_loan_with_timestamp_dates() {
        let mut app = TestApp::new();
        app.loans
            .expect_create()
            .withf(|loan| {
                loan.data_emprestimo == NaiveDate::from_ymd_opt(2024, 5, 2)
                    && loan.data_devolucao == NaiveDate::from_ymd_opt(2024, 5, 16)
            })
            .times(1)
            .returning(|_| Ok(1));

        let body = json!({
            "idAluno": 1,
            "idLivro": 2,
            "dataEmprestimo": "2024-05-02T03:00:00.000Z",
            "dataDevolução": "2024-05-16T03:00:00.000Z"
        });
        let (status, body) =
            send(app.router(), Method::POST, "/novo/emprestimo", Some(body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], CREATED);
    }

    #[tokio::test]
    async fn test_delete_with_non_numeric_id() {
        let mut app = TestApp::new();
        app.loans.expect_delete().never();

        let (status, body) =
            send(app.router(), Method::DELETE, "/delete/emprestimo/abc", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], REMOVE_FAILED);
    }

    #[tokio::test]
    async fn test_undecodable_id_gets_json_message() {
        let mut app = TestApp::new();
        app.loans.expect_delete().never();
        app.loans.expect_update().never();
        let router = app.router();

        let (status, body) =
            send(router.clone(), Method::DELETE, "/delete/emprestimo/%FF", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], REMOVE_FAILED);

        let (status, body) = send(
            router,
            Method::PUT,
            "/atualizar/emprestimo/%FF",
            Some(json!({ "idAluno": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], UPDATE_FAILED);
    }

    #[tokio::test]
    async fn test_non_numeric_id_with_typed_status_codes() {
        let mut app = TestApp::new().typed_status_codes();
        app.loans.expect_update().never();

        let (status, _) = send(
            app.router(),
            Method::PUT,
            "/atualizar/emprestimo/abc",
            Some(json!({})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_loan_full_overwrite() {
        let mut app = TestApp::new();
        app.loans
            .expect_update()
            .withf(|id, loan| {
                *id == 9
                    && loan.id_aluno == Some(4)
                    && loan.data_emprestimo.is_none()
                    && loan.status_emprestimo.as_deref() == Some("devolvido")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let body = json!({ "idAluno": 4, "statusEmprestimo": "devolvido" });
        let (status, body) =
            send(app.router(), Method::PUT, "/atualizar/emprestimo/9", Some(body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], UPDATED);
    }

    #[tokio::test]
    async fn test_list_loans_empty() {
        let mut app = TestApp::new();
        app.loans.expect_list().returning(|| Ok(Vec::new()));

        let (status, body) = send(app.router(), Method::GET, "/lista/emprestimo", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }
}
