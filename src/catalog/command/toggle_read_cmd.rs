use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ToggleReadCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ToggleReadCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ToggleReadCommandRequest {
    pub(crate) isbn: String,
}

impl ToggleReadCommandRequest {
    pub fn new(isbn: String) -> Self {
        Self {
            isbn,
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct ToggleReadCommandResponse {
    pub book: BookDto,
}

impl ToggleReadCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<ToggleReadCommandRequest, ToggleReadCommandResponse> for ToggleReadCommand {
    async fn execute(&self, req: ToggleReadCommandRequest) -> Result<ToggleReadCommandResponse, CommandError> {
        self.catalog_service.toggle_read(req.isbn.as_str()).await
            .map_err(CommandError::from).map(ToggleReadCommandResponse::new)
    }
}
