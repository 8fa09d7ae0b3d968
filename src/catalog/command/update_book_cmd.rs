use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// The book replaces every field of the stored one, a missing description or read flag is not
// carried over from the old record.
#[derive(Debug)]
pub(crate) struct UpdateBookCommandRequest {
    pub isbn: String,
    pub book: BookDto,
}

impl UpdateBookCommandRequest {
    pub fn new(isbn: &str, book: BookDto) -> Self {
        Self {
            isbn: isbn.to_string(),
            book,
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.update_book(req.isbn.as_str(), &req.book).await
            .map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
