//! API integration tests
//!
//! Run against a live server with a migrated database:
//! `cargo test --test api_tests -- --ignored`

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:3333";

async fn list(client: &Client, path: &str) -> Vec<Value> {
    let response = client
        .get(format!("{}{}", BASE_URL, path))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    body.as_array().cloned().expect("List response is not an array")
}

/// Highest book id with the given title
async fn find_book_id(client: &Client, titulo: &str) -> Option<i64> {
    list(client, "/lista/livros")
        .await
        .iter()
        .filter(|b| b["titulo"] == titulo)
        .filter_map(|b| b["id_livro"].as_i64())
        .max()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_greeting() {
    let client = Client::new();

    let response = client.get(BASE_URL).send().await.expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Olá, mundo!");
}

#[tokio::test]
#[ignore]
async fn test_book_lifecycle() {
    let client = Client::new();
    let titulo = "Integration Book";

    let response = client
        .post(format!("{}/novo/livro", BASE_URL))
        .json(&json!({
            "titulo": titulo,
            "autor": "Y",
            "editora": "Z",
            "ano_publicacao": "2020",
            "isbn": "123",
            "quant_total": 2,
            "quant_disponivel": 2,
            "valor_aquisicao": 10,
            "status_livro_emprestado": "não"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Livro cadastrado com sucesso!");

    let id = find_book_id(&client, titulo).await.expect("Created book not listed");

    // Full overwrite: fields left out of the body become null
    let response = client
        .put(format!("{}/atualizar/livro/{}", BASE_URL, id))
        .json(&json!({ "titulo": titulo, "autor": "Outro", "quant_total": 3 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let books = list(&client, "/lista/livros").await;
    let updated = books
        .iter()
        .find(|b| b["id_livro"].as_i64() == Some(id))
        .expect("Updated book not listed");
    assert_eq!(updated["autor"], "Outro");
    assert_eq!(updated["quant_total"], 3);
    assert!(updated["editora"].is_null());

    // Remove twice: removed, then nothing to remove
    let url = format!("{}/delete/livro/{}", BASE_URL, id);
    let first = client.delete(&url).send().await.expect("Failed to send request");
    assert_eq!(first.status(), StatusCode::OK);
    let second = client.delete(&url).send().await.expect("Failed to send request");
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    let books = list(&client, "/lista/livros").await;
    assert!(books.iter().all(|b| b["id_livro"].as_i64() != Some(id)));
}

#[tokio::test]
#[ignore]
async fn test_delete_missing_student() {
    let client = Client::new();
    let before = list(&client, "/lista/alunos").await.len();

    let response = client
        .delete(format!("{}/delete/aluno/999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].is_string());
    assert_eq!(list(&client, "/lista/alunos").await.len(), before);
}

#[tokio::test]
#[ignore]
async fn test_delete_loan_with_non_numeric_id() {
    let client = Client::new();

    let response = client
        .delete(format!("{}/delete/emprestimo/abc", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore]
async fn test_create_loan() {
    let client = Client::new();
    let before = list(&client, "/lista/emprestimo").await.len();

    let response = client
        .post(format!("{}/novo/emprestimo", BASE_URL))
        .json(&json!({
            "id_aluno": 1,
            "id_livro": 1,
            "data_emprestimo": "2024-05-02",
            "data_devolucao": "2024-05-16",
            "status_emprestimo": "ativo"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let loans = list(&client, "/lista/emprestimo").await;
    assert_eq!(loans.len(), before + 1);

    let created = loans
        .iter()
        .filter_map(|l| l["id_emprestimo"].as_i64())
        .max()
        .expect("No loan listed");
    let _ = client
        .delete(format!("{}/delete/emprestimo/{}", BASE_URL, created))
        .send()
        .await;
}
