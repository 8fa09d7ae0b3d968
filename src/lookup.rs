pub mod factory;
pub mod google_books;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

// BookLookup resolves an isbn into a normalized book through an external catalog. It has no
// side effects beyond the outbound query.
#[async_trait]
pub(crate) trait BookLookup: Sync + Send {
    async fn lookup(&self, isbn: &str) -> LibraryResult<BookDto>;
}
