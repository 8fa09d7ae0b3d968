use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct FindBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl FindBooksCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Deserialize)]
pub(crate) enum FindBooksBy {
    Author,
    Title,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FindBooksCommandRequest {
    pub(crate) by: FindBooksBy,
    pub(crate) query: String,
}

impl FindBooksCommandRequest {
    pub fn new(by: FindBooksBy, query: String) -> Self {
        Self {
            by,
            query,
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct FindBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl FindBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<FindBooksCommandRequest, FindBooksCommandResponse> for FindBooksCommand {
    async fn execute(&self, req: FindBooksCommandRequest) -> Result<FindBooksCommandResponse, CommandError> {
        let res = match req.by {
            FindBooksBy::Author => self.catalog_service.find_books_by_author(req.query.as_str()).await,
            FindBooksBy::Title => self.catalog_service.find_books_by_title(req.query.as_str()).await,
        };
        res.map_err(CommandError::from).map(FindBooksCommandResponse::new)
    }
}
