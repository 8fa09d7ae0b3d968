use std::collections::HashMap;
use std::sync::Arc;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, patch},
    Router,
};
use serde_json::Value;
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::find_books_cmd::{FindBooksBy, FindBooksCommand, FindBooksCommandRequest, FindBooksCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::search_and_add_book_cmd::{SearchAndAddBookCommand, SearchAndAddBookCommandRequest, SearchAndAddBookCommandResponse};
use crate::catalog::command::search_book_cmd::{SearchBookCommand, SearchBookCommandRequest, SearchBookCommandResponse};
use crate::catalog::command::toggle_read_cmd::{ToggleReadCommand, ToggleReadCommandRequest, ToggleReadCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_rejection_to_server_error, json_to_server_error, server_error, ServerError};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/books/search",
               get(search_book).post(search_and_add_book))
        .route("/books",
               get(list_books).post(add_book))
        .route("/books/author/:author", get(find_books_by_author))
        .route("/books/title/:title", get(find_books_by_title))
        .route("/books/:isbn",
               get(find_book_by_isbn).put(update_book).delete(remove_book))
        .route("/books/:isbn/toggle-read", patch(toggle_read))
        .with_state(state)
}

fn build_service(state: &AppState) -> Arc<dyn CatalogService> {
    state.catalog_service.clone()
}

fn isbn_param(params: &HashMap<String, String>) -> Result<String, ServerError> {
    params.get("isbn")
        .map(|isbn| isbn.trim().to_string())
        .filter(|isbn| !isbn.is_empty())
        .ok_or_else(|| server_error(StatusCode::BAD_REQUEST, "isbn query parameter is required"))
}

pub(crate) async fn search_book(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>) -> Result<Json<SearchBookCommandResponse>, ServerError> {
    let isbn = isbn_param(&params)?;
    let req = SearchBookCommandRequest::new(isbn.as_str());
    let res = SearchBookCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn search_and_add_book(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>) -> Result<Json<SearchAndAddBookCommandResponse>, ServerError> {
    let isbn = isbn_param(&params)?;
    let req = SearchAndAddBookCommandRequest::new(isbn.as_str());
    let res = SearchAndAddBookCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(build_service(&state)).execute(ListBooksCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) async fn find_books_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>) -> Result<Json<FindBooksCommandResponse>, ServerError> {
    let req = FindBooksCommandRequest::new(FindBooksBy::Author, author);
    let res = FindBooksCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_books_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>) -> Result<Json<FindBooksCommandResponse>, ServerError> {
    let req = FindBooksCommandRequest::new(FindBooksBy::Title, title);
    let res = FindBooksCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest::new(isbn);
    let res = GetBookCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Result<Json<Value>, JsonRejection>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let Json(body) = json.map_err(json_rejection_to_server_error)?;
    let req: AddBookCommandRequest = serde_json::from_value(body).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    json: Result<Json<Value>, JsonRejection>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let Json(body) = json.map_err(json_rejection_to_server_error)?;
    let book: BookDto = serde_json::from_value(body).map_err(json_to_server_error)?;
    let req = UpdateBookCommandRequest::new(isbn.as_str(), book);
    let res = UpdateBookCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest::new(isbn);
    let res = RemoveBookCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn toggle_read(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<ToggleReadCommandResponse>, ServerError> {
    let req = ToggleReadCommandRequest::new(isbn);
    let res = ToggleReadCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}
