//! Book endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use crate::{
    error::MessageResponse,
    models::book::{Book, BookPayload},
    AppState,
};

use super::{body_error, path_id, ApiFailure};

const LIST_FAILED: &str = "Não foi possível acessar a listagem de Livros";
const CREATED: &str = "Livro cadastrado com sucesso!";
const CREATE_FAILED: &str =
    "Não foi possível cadastrar o livro. Entre em contato com o administrador do sistema.";
const REMOVED: &str = "Livro removido com sucesso!";
const REMOVE_FAILED: &str =
    "Não foi possível remover o livro. Entre em contato com o administrador do sistema.";
const UPDATED: &str = "Livro atualizado com sucesso!";
const UPDATE_FAILED: &str =
    "Não foi possível atualizar o livro. Entre em contato com o administrador do sistema.";

/// List all books
#[utoipa::path(
    get,
    path = "/lista/livros",
    tag = "books",
    responses(
        (status = 200, description = "Book list", body = Vec<Book>),
        (status = 400, description = "Listing failed", body = MessageResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, ApiFailure> {
    let books = state
        .services
        .books
        .list()
        .await
        .map_err(|e| state.fail(e, LIST_FAILED))?;
    Ok(Json(books))
}

/// Register a new book
#[utoipa::path(
    post,
    path = "/novo/livro",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book registered", body = MessageResponse),
        (status = 400, description = "Registration failed", body = MessageResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiFailure> {
    let Json(payload) = payload.map_err(|e| state.fail(body_error(e), CREATE_FAILED))?;

    state
        .services
        .books
        .create(payload)
        .await
        .map_err(|e| state.fail(e, CREATE_FAILED))?;
    Ok(Json(MessageResponse::new(CREATED)))
}

/// Remove a book
#[utoipa::path(
    delete,
    path = "/delete/livro/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book removed", body = MessageResponse),
        (status = 400, description = "Nothing removed", body = MessageResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiFailure> {
    let id = path_id(id).map_err(|e| state.fail(e, REMOVE_FAILED))?;

    state
        .services
        .books
        .delete(id)
        .await
        .map_err(|e| state.fail(e, REMOVE_FAILED))?;
    Ok(Json(MessageResponse::new(REMOVED)))
}

/// Overwrite a book
#[utoipa::path(
    put,
    path = "/atualizar/livro/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Nothing updated", body = MessageResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiFailure> {
    let id = path_id(id).map_err(|e| state.fail(e, UPDATE_FAILED))?;
    let Json(payload) = payload.map_err(|e| state.fail(body_error(e), UPDATE_FAILED))?;

    state
        .services
        .books
        .update(id, payload)
        .await
        .map_err(|e| state.fail(e, UPDATE_FAILED))?;
    Ok(Json(MessageResponse::new(UPDATED)))
}
