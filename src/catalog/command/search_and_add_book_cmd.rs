use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct SearchAndAddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl SearchAndAddBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchAndAddBookCommandRequest {
    pub(crate) isbn: String,
}

impl SearchAndAddBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct SearchAndAddBookCommandResponse {
    pub book: BookDto,
}

impl SearchAndAddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<SearchAndAddBookCommandRequest, SearchAndAddBookCommandResponse> for SearchAndAddBookCommand {
    async fn execute(&self, req: SearchAndAddBookCommandRequest) -> Result<SearchAndAddBookCommandResponse, CommandError> {
        self.catalog_service.search_and_add_book(req.isbn.as_str()).await
            .map_err(CommandError::from).map(SearchAndAddBookCommandResponse::new)
    }
}
