use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

const INDENT: &[u8] = b"    ";

// FileBookRepository keeps the whole collection in a single JSON file. Every load reads the
// file again and every save rewrites it, there is no cache and no lock between the two.
#[derive(Debug)]
pub struct FileBookRepository {
    path: PathBuf,
}

impl FileBookRepository {
    pub(crate) fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for FileBookRepository {
    async fn load(&self) -> LibraryResult<Vec<BookEntity>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(vec![]);
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "books file unreadable, using empty collection");
                return Ok(vec![]);
            }
        };
        match decode_books(&bytes) {
            Ok(books) => Ok(books),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "books file malformed, using empty collection");
                Ok(vec![])
            }
        }
    }

    async fn save(&self, entities: &[BookEntity]) -> LibraryResult<()> {
        let bytes = encode_books(entities)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, bytes).await?;
        tracing::debug!(path = %self.path.display(), books = entities.len(), "saved books file");
        Ok(())
    }
}

pub(crate) fn decode_books(bytes: &[u8]) -> LibraryResult<Vec<BookEntity>> {
    serde_json::from_slice(bytes).map_err(|err| LibraryError::malformed_local_data(
        format!("malformed books data {}", err).as_str()))
}

pub(crate) fn encode_books(entities: &[BookEntity]) -> LibraryResult<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    entities.serialize(&mut ser)?;
    Ok(buf)
}
