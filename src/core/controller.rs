use std::sync::Arc;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{json, Value};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub(crate) catalog_service: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(config: Configuration) -> LibraryResult<AppState> {
        let catalog_service = factory::create_catalog_service(&config)?;
        Ok(AppState {
            config,
            catalog_service: Arc::from(catalog_service),
        })
    }
}

pub type ServerError = (StatusCode, Json<Value>);

pub fn server_error(status: StatusCode, message: &str) -> ServerError {
    (status, Json(json!({ "detail": message })))
}

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    server_error(StatusCode::BAD_REQUEST, format!("{}", err).as_str())
}

// bodies axum could not read as json, including a missing content type, are client errors too
pub fn json_rejection_to_server_error(rejection: JsonRejection) -> ServerError {
    server_error(StatusCode::BAD_REQUEST, rejection.body_text().as_str())
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let status = match err {
            CommandError::DuplicateKey { .. } => {
                StatusCode::BAD_REQUEST
            }
            CommandError::NotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            CommandError::Upstream { status, .. } => {
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            CommandError::Runtime { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            CommandError::Serialization { .. } => {
                StatusCode::BAD_REQUEST
            }
            CommandError::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
        };
        server_error(status, err.message())
    }
}
