pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn search_book(&self, isbn: &str) -> LibraryResult<BookDto>;
    async fn search_and_add_book(&self, isbn: &str) -> LibraryResult<BookDto>;
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto>;
    async fn find_books_by_author(&self, author: &str) -> LibraryResult<Vec<BookDto>>;
    async fn find_books_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>>;
    async fn update_book(&self, isbn: &str, book: &BookDto) -> LibraryResult<BookDto>;
    async fn remove_book(&self, isbn: &str) -> LibraryResult<()>;
    async fn toggle_read(&self, isbn: &str) -> LibraryResult<BookDto>;
}
