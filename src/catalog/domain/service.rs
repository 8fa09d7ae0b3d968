use async_trait::async_trait;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::lookup::BookLookup;

const DUPLICATE_ISBN: &str = "Book with this ISBN already exists";
const BOOK_NOT_FOUND: &str = "Book not found";

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    book_lookup: Box<dyn BookLookup>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(book_repository: Box<dyn BookRepository>, book_lookup: Box<dyn BookLookup>) -> Self {
        Self {
            book_repository,
            book_lookup,
        }
    }

    // appends after the duplicate check, nothing is written when the isbn is taken
    async fn insert_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let mut books = self.book_repository.load().await?;
        if books.iter().any(|b| b.id() == book.id()) {
            return Err(LibraryError::duplicate_key(DUPLICATE_ISBN));
        }
        books.push(BookEntity::from(book));
        self.book_repository.save(&books).await?;
        tracing::info!(isbn = book.isbn.as_str(), "added book");
        Ok(book.clone())
    }

    async fn find_books<F>(&self, matches: F) -> LibraryResult<Vec<BookDto>>
        where F: Fn(&BookEntity) -> bool + Send {
        let books: Vec<BookDto> = self.book_repository.load().await?
            .iter()
            .filter(|&b| matches(b))
            .map(BookDto::from)
            .collect();
        if books.is_empty() {
            return Err(LibraryError::not_found("No books found"));
        }
        Ok(books)
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        book.validate()?;
        self.insert_book(book).await
    }

    async fn search_book(&self, isbn: &str) -> LibraryResult<BookDto> {
        self.book_lookup.lookup(isbn).await
    }

    async fn search_and_add_book(&self, isbn: &str) -> LibraryResult<BookDto> {
        let book = self.book_lookup.lookup(isbn).await?;
        self.insert_book(&book).await
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.load().await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        self.book_repository.load().await?
            .iter()
            .find(|b| b.isbn == isbn)
            .map(BookDto::from)
            .ok_or_else(|| LibraryError::not_found(BOOK_NOT_FOUND))
    }

    async fn find_books_by_author(&self, author: &str) -> LibraryResult<Vec<BookDto>> {
        self.find_books(|b| b.author_contains(author)).await
    }

    async fn find_books_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>> {
        self.find_books(|b| b.title_contains(title)).await
    }

    async fn update_book(&self, isbn: &str, book: &BookDto) -> LibraryResult<BookDto> {
        book.validate()?;
        let mut books = self.book_repository.load().await?;
        let ndx = books.iter().position(|b| b.isbn == isbn)
            .ok_or_else(|| LibraryError::not_found(BOOK_NOT_FOUND))?;
        if book.isbn != isbn && books.iter().any(|b| b.isbn == book.isbn) {
            return Err(LibraryError::duplicate_key(DUPLICATE_ISBN));
        }
        books[ndx] = BookEntity::from(book);
        self.book_repository.save(&books).await?;
        tracing::info!(isbn, "updated book");
        Ok(book.clone())
    }

    async fn remove_book(&self, isbn: &str) -> LibraryResult<()> {
        let mut books = self.book_repository.load().await?;
        let ndx = books.iter().position(|b| b.isbn == isbn)
            .ok_or_else(|| LibraryError::not_found(BOOK_NOT_FOUND))?;
        books.remove(ndx);
        self.book_repository.save(&books).await?;
        tracing::info!(isbn, "removed book");
        Ok(())
    }

    async fn toggle_read(&self, isbn: &str) -> LibraryResult<BookDto> {
        let mut books = self.book_repository.load().await?;
        let book = books.iter_mut().find(|b| b.isbn == isbn)
            .ok_or_else(|| LibraryError::not_found(BOOK_NOT_FOUND))?;
        book.toggle_read();
        let is_read = book.is_read();
        let res = BookDto::from(&*book);
        self.book_repository.save(&books).await?;
        tracing::info!(isbn, is_read, "toggled read status");
        Ok(res)
    }
}
