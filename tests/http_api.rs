use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use bookshelf::catalog::controller::router;
use bookshelf::core::controller::AppState;
use bookshelf::core::domain::Configuration;
use bookshelf::core::repository::RepositoryStore;
use bookshelf::utils::testing::spawn_server;
use serde_json::{json, Value};
use tempfile::TempDir;

async fn volumes(Query(params): Query<HashMap<String, String>>) -> Response {
    match params.get("q").map(String::as_str) {
        Some("isbn:999") => (StatusCode::OK, r#"{"items":[{"volumeInfo":{"title":"Dune"}}]}"#).into_response(),
        Some("isbn:9780261103344") => (StatusCode::OK, r#"{"items":[{"volumeInfo":{
            "title":"The Hobbit","authors":["J. R. R. Tolkien"],"description":"There and back again"}}]}"#).into_response(),
        Some("isbn:000") => (StatusCode::OK, r#"{"items":[]}"#).into_response(),
        _ => (StatusCode::SERVICE_UNAVAILABLE, "unavailable").into_response(),
    }
}

struct TestCatalog {
    _dir: TempDir,
    books_file: PathBuf,
    base_url: String,
    client: reqwest::Client,
}

impl TestCatalog {
    fn start() -> Self {
        let dir = TempDir::new().expect("should create temp dir");
        let books_file = dir.path().join("books.json");
        let upstream_url = spawn_server(Router::new().route("/volumes", get(volumes))).expect("should start upstream stub");

        let mut config = Configuration::new(books_file.to_str().expect("utf8 path"));
        config.store = RepositoryStore::File;
        config.lookup_url = format!("{}/volumes", upstream_url);
        config.lookup_timeout = Duration::from_secs(5);
        let state = AppState::new(config).expect("should build state");

        Self {
            _dir: dir,
            books_file,
            base_url: spawn_server(router(state)).expect("should start catalog"),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> (u16, Value) {
        let res = req.send().await.expect("should reach catalog");
        let status = res.status().as_u16();
        let body = res.json::<Value>().await.unwrap_or(Value::Null);
        (status, body)
    }

    async fn add(&self, book: Value) -> (u16, Value) {
        self.send(self.client.post(self.url("/books")).json(&book)).await
    }

    async fn list(&self) -> Vec<Value> {
        let (status, body) = self.send(self.client.get(self.url("/books"))).await;
        assert_eq!(200, status);
        body.as_array().cloned().expect("should return an array")
    }
}

#[tokio::test]
async fn test_should_add_duplicate_and_delete_twice() {
    let catalog = TestCatalog::start();
    assert!(catalog.list().await.is_empty());

    let dune = json!({"title": "Dune", "author": "Frank Herbert", "isbn": "123"});
    let (status, body) = catalog.add(dune.clone()).await;
    assert_eq!(200, status);
    assert_eq!("Dune", body["title"]);
    assert_eq!(false, body["is_read"]);
    assert!(body["description"].is_null());
    assert_eq!(1, catalog.list().await.len());

    let (status, body) = catalog.add(dune).await;
    assert_eq!(400, status);
    assert_eq!("Book with this ISBN already exists", body["detail"]);
    assert_eq!(1, catalog.list().await.len());

    let (status, body) = catalog.send(catalog.client.delete(catalog.url("/books/123"))).await;
    assert_eq!(200, status);
    assert_eq!("Book deleted successfully", body["message"]);
    assert!(catalog.list().await.is_empty());

    let (status, _) = catalog.send(catalog.client.delete(catalog.url("/books/123"))).await;
    assert_eq!(404, status);
}

#[tokio::test]
async fn test_should_get_update_and_toggle_book() {
    let catalog = TestCatalog::start();
    let _ = catalog.add(json!({"title": "Dune", "author": "Frank Herbert", "isbn": "123", "description": "Spice"})).await;

    let (status, body) = catalog.send(catalog.client.get(catalog.url("/books/123"))).await;
    assert_eq!(200, status);
    assert_eq!("Spice", body["description"]);

    let (status, _) = catalog.send(catalog.client.get(catalog.url("/books/999"))).await;
    assert_eq!(404, status);

    let updated = json!({"title": "Dune Messiah", "author": "Frank Herbert", "isbn": "123"});
    let (status, body) = catalog.send(catalog.client.put(catalog.url("/books/123")).json(&updated)).await;
    assert_eq!(200, status);
    assert_eq!("Dune Messiah", body["title"]);
    assert!(body["description"].is_null());

    let (status, _) = catalog.send(catalog.client.put(catalog.url("/books/999")).json(&updated)).await;
    assert_eq!(404, status);

    let (status, body) = catalog.send(catalog.client.patch(catalog.url("/books/123/toggle-read"))).await;
    assert_eq!(200, status);
    assert_eq!(true, body["is_read"]);
    let (_, body) = catalog.send(catalog.client.patch(catalog.url("/books/123/toggle-read"))).await;
    assert_eq!(false, body["is_read"]);

    let (status, _) = catalog.send(catalog.client.patch(catalog.url("/books/999/toggle-read"))).await;
    assert_eq!(404, status);
}

#[tokio::test]
async fn test_should_search_by_author_and_title() {
    let catalog = TestCatalog::start();
    let _ = catalog.add(json!({"title": "The Hobbit", "author": "J. R. R. Tolkien", "isbn": "1"})).await;
    let _ = catalog.add(json!({"title": "Dune", "author": "Frank Herbert", "isbn": "2"})).await;

    let (status, body) = catalog.send(catalog.client.get(catalog.url("/books/title/HOBBIT"))).await;
    assert_eq!(200, status);
    assert_eq!(1, body.as_array().map(Vec::len).unwrap_or(0));
    assert_eq!("The Hobbit", body[0]["title"]);

    let (status, body) = catalog.send(catalog.client.get(catalog.url("/books/author/frank%20herbert"))).await;
    assert_eq!(200, status);
    assert_eq!("2", body[0]["isbn"]);

    let (status, _) = catalog.send(catalog.client.get(catalog.url("/books/author/austen"))).await;
    assert_eq!(404, status);
}

#[tokio::test]
async fn test_should_search_and_add_from_upstream() {
    let catalog = TestCatalog::start();

    let (status, body) = catalog.send(catalog.client.get(catalog.url("/books/search?isbn=999"))).await;
    assert_eq!(200, status);
    assert_eq!("Dune", body["title"]);
    assert_eq!("Unknown", body["author"]);
    assert_eq!("No description available", body["description"]);
    assert!(catalog.list().await.is_empty());

    let (status, body) = catalog.send(catalog.client.post(catalog.url("/books/search?isbn=9780261103344"))).await;
    assert_eq!(200, status);
    assert_eq!("J. R. R. Tolkien", body["author"]);
    assert_eq!(1, catalog.list().await.len());

    let before = std::fs::read(&catalog.books_file).expect("should read books file");
    let (status, _) = catalog.send(catalog.client.post(catalog.url("/books/search?isbn=9780261103344"))).await;
    assert_eq!(400, status);
    let after = std::fs::read(&catalog.books_file).expect("should read books file");
    assert_eq!(before, after);

    let (status, body) = catalog.send(catalog.client.post(catalog.url("/books/search?isbn=000"))).await;
    assert_eq!(404, status);
    assert_eq!("Book not found in external API", body["detail"]);

    let (status, _) = catalog.send(catalog.client.post(catalog.url("/books/search?isbn=503"))).await;
    assert_eq!(503, status);
    assert_eq!(1, catalog.list().await.len());

    let (status, _) = catalog.send(catalog.client.get(catalog.url("/books/search"))).await;
    assert_eq!(400, status);
}

#[tokio::test]
async fn test_should_reject_invalid_bodies() {
    let catalog = TestCatalog::start();

    let (status, _) = catalog.add(json!({"title": "Dune", "isbn": "123"})).await;
    assert_eq!(400, status);

    let (status, body) = catalog.add(json!({"title": "Dune", "author": "Frank Herbert", "isbn": " "})).await;
    assert_eq!(400, status);
    assert_eq!("isbn must not be blank", body["detail"]);
    assert!(catalog.list().await.is_empty());
}

#[tokio::test]
async fn test_should_reject_unreadable_json_bodies() {
    let catalog = TestCatalog::start();
    let json_header = ("content-type", "application/json");

    let (status, body) = catalog.send(catalog.client.post(catalog.url("/books"))
        .header(json_header.0, json_header.1).body("{not json")).await;
    assert_eq!(400, status);
    assert!(body["detail"].is_string(), "{}", body);

    let dune = r#"{"title": "Dune", "author": "Frank Herbert", "isbn": "123"}"#;
    let (status, body) = catalog.send(catalog.client.post(catalog.url("/books")).body(dune)).await;
    assert_eq!(400, status);
    assert!(body["detail"].is_string(), "{}", body);

    let _ = catalog.add(serde_json::from_str(dune).expect("valid json")).await;
    let (status, body) = catalog.send(catalog.client.put(catalog.url("/books/123"))
        .header(json_header.0, json_header.1).body("[1, 2")).await;
    assert_eq!(400, status);
    assert!(body["detail"].is_string(), "{}", body);

    let (status, body) = catalog.send(catalog.client.put(catalog.url("/books/123")).body(dune)).await;
    assert_eq!(400, status);
    assert!(body["detail"].is_string(), "{}", body);
    assert_eq!(1, catalog.list().await.len());
}

#[tokio::test]
async fn test_should_recover_from_malformed_books_file() {
    let catalog = TestCatalog::start();
    std::fs::write(&catalog.books_file, "not json at all").expect("should write books file");
    assert!(catalog.list().await.is_empty());

    let (status, _) = catalog.add(json!({"title": "Dune", "author": "Frank Herbert", "isbn": "123"})).await;
    assert_eq!(200, status);
    let text = std::fs::read_to_string(&catalog.books_file).expect("should read books file");
    assert!(text.starts_with("[\n    {"));
}
