use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

// MemoryBookRepository holds the collection in process memory, nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: Mutex<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn load(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.lock().await.clone())
    }

    async fn save(&self, entities: &[BookEntity]) -> LibraryResult<()> {
        *self.books.lock().await = entities.to_vec();
        Ok(())
    }
}
