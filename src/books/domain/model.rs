use serde::{Deserialize, Serialize};
use crate::books::domain::{Book, contains_ignore_case};
use crate::core::domain::Identifiable;

// BookEntity is the persisted shape of a book in the backing file. Files written before
// read status was tracked have no is_read field, which loads as unread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub description: Option<String>,
    #[serde(default)]
    pub is_read: bool,
}

impl BookEntity {
    #[cfg(test)]
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            description: None,
            is_read: false,
        }
    }

    pub fn toggle_read(&mut self) {
        self.is_read = !self.is_read;
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookEntity {
    fn is_read(&self) -> bool {
        self.is_read
    }

    fn author_contains(&self, query: &str) -> bool {
        contains_ignore_case(self.author.as_str(), query)
    }

    fn title_contains(&self, query: &str) -> bool {
        contains_ignore_case(self.title.as_str(), query)
    }
}
