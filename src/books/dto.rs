use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub description: Option<String>,
    #[serde(default)]
    pub is_read: bool,
}

impl BookDto {
    pub fn new(title: &str, author: &str, isbn: &str, description: Option<&str>) -> LibraryResult<BookDto> {
        let book = BookDto {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            description: description.map(str::to_string),
            is_read: false,
        };
        book.validate()?;
        Ok(book)
    }

    pub fn validate(&self) -> LibraryResult<()> {
        for (name, value) in [("isbn", &self.isbn), ("title", &self.title), ("author", &self.author)] {
            if value.trim().is_empty() {
                return Err(LibraryError::validation(
                    format!("{} must not be blank", name).as_str(), Some(name.to_string())));
            }
        }
        Ok(())
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            description: other.description.clone(),
            is_read: other.is_read,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            description: other.description.clone(),
            is_read: other.is_read,
        }
    }
}
