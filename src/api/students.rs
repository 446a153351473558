//! Student endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use crate::{
    error::MessageResponse,
    models::student::{Student, StudentPayload},
    AppState,
};

use super::{body_error, path_id, ApiFailure};

const LIST_FAILED: &str = "Não foi possível acessar a listagem de Alunos";
const CREATED: &str = "Aluno cadastrado com sucesso!";
const CREATE_FAILED: &str =
    "Não foi possível cadastrar o aluno. Entre em contato com o administrador do sistema.";
const REMOVED: &str = "Aluno removido com sucesso!";
const REMOVE_FAILED: &str =
    "Não foi possível remover o aluno. Entre em contato com o administrador do sistema.";
const UPDATED: &str = "Aluno atualizado com sucesso!";
const UPDATE_FAILED: &str =
    "Não foi possível atualizar o aluno. Entre em contato com o administrador do sistema.";

/// List all students
#[utoipa::path(
    get,
    path = "/lista/alunos",
    tag = "students",
    responses(
        (status = 200, description = "Student list", body = Vec<Student>),
        (status = 400, description = "Listing failed", body = MessageResponse)
    )
)]
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<Student>>, ApiFailure> {
    let students = state
        .services
        .students
        .list()
        .await
        .map_err(|e| state.fail(e, LIST_FAILED))?;
    Ok(Json(students))
}

/// Register a new student
#[utoipa::path(
    post,
    path = "/novo/aluno",
    tag = "students",
    request_body = StudentPayload,
    responses(
        (status = 200, description = "Student registered", body = MessageResponse),
        (status = 400, description = "Registration failed", body = MessageResponse)
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<StudentPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiFailure> {
    let Json(payload) = payload.map_err(|e| state.fail(body_error(e), CREATE_FAILED))?;

    state
        .services
        .students
        .create(payload)
        .await
        .map_err(|e| state.fail(e, CREATE_FAILED))?;
    Ok(Json(MessageResponse::new(CREATED)))
}

/// Remove a student
#[utoipa::path(
    delete,
    path = "/delete/aluno/{id}",
    tag = "students",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student removed", body = MessageResponse),
        (status = 400, description = "Nothing removed", body = MessageResponse)
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiFailure> {
    let id = path_id(id).map_err(|e| state.fail(e, REMOVE_FAILED))?;

    state
        .services
        .students
        .delete(id)
        .await
        .map_err(|e| state.fail(e, REMOVE_FAILED))?;
    Ok(Json(MessageResponse::new(REMOVED)))
}

/// Overwrite a student
#[utoipa::path(
    put,
    path = "/atualizar/aluno/{id}",
    tag = "students",
    params(("id" = i32, Path, description = "Student ID")),
    request_body = StudentPayload,
    responses(
        (status = 200, description = "Student updated", body = MessageResponse),
        (status = 400, description = "Nothing updated", body = MessageResponse)
    )
)]
pub async fn update_student(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<StudentPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiFailure> {
    let id = path_id(id).map_err(|e| state.fail(e, UPDATE_FAILED))?;
    let Json(payload) = payload.map_err(|e| state.fail(body_error(e), UPDATE_FAILED))?;

    state
        .services
        .students
        .update(id, payload)
        .await
        .map_err(|e| state.fail(e, UPDATE_FAILED))?;
    Ok(Json(MessageResponse::new(UPDATED)))
}
