use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::books::dto::BookDto;
use crate::core::library::{LibraryError, LibraryResult};
use crate::lookup::BookLookup;

const UNKNOWN: &str = "Unknown";
const NO_DESCRIPTION: &str = "No description available";

// GoogleBooksLookup queries the Google Books volumes endpoint with `q=isbn:<isbn>`.
#[derive(Debug)]
pub struct GoogleBooksLookup {
    client: reqwest::Client,
    url: String,
}

impl GoogleBooksLookup {
    pub(crate) fn new(url: &str, timeout: Duration) -> LibraryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl BookLookup for GoogleBooksLookup {
    async fn lookup(&self, isbn: &str) -> LibraryResult<BookDto> {
        tracing::info!(isbn, "searching external catalog");
        let res = self.client
            .get(self.url.as_str())
            .query(&[("q", format!("isbn:{}", isbn))])
            .send()
            .await?;
        let status = res.status();
        if !status.is_success() {
            tracing::warn!(isbn, status = status.as_u16(), "external catalog request failed");
            return Err(LibraryError::upstream("Failed to fetch book details", status.as_u16()));
        }
        let model: VolumesModel = res.json().await.map_err(|err| {
            if err.is_timeout() {
                tracing::warn!(isbn, error = %err, "external catalog timed out sending body");
                return LibraryError::from(err);
            }
            tracing::warn!(isbn, error = %err, "external catalog returned undecodable body");
            LibraryError::upstream("Failed to fetch book details", 502)
        })?;
        model.into_book(isbn)
    }
}

#[derive(Debug, Default, Deserialize)]
struct VolumesModel {
    #[serde(default)]
    items: Vec<Item>,
}

#[derive(Debug, Default, Deserialize)]
struct Item {
    #[serde(rename = "volumeInfo", default)]
    volume_info: VolumeInfo,
}

/// Volume information from the Google Books API, every field may be missing.
#[derive(Debug, Default, Deserialize)]
struct VolumeInfo {
    title: Option<String>,
    #[serde(default)]
    authors: Vec<String>,
    description: Option<String>,
}

impl VolumesModel {
    // Only the first item counts. The response does not echo the isbn so the queried one is used.
    fn into_book(self, isbn: &str) -> LibraryResult<BookDto> {
        let VolumeInfo { title, authors, description } = self.items
            .into_iter()
            .next()
            .ok_or_else(|| LibraryError::upstream_empty("Book not found in external API"))?
            .volume_info;

        let author = if authors.is_empty() {
            UNKNOWN.to_string()
        } else {
            authors.join(", ")
        };

        Ok(BookDto {
            title: title.unwrap_or_else(|| UNKNOWN.to_string()),
            author,
            isbn: isbn.to_string(),
            description: Some(description.unwrap_or_else(|| NO_DESCRIPTION.to_string())),
            is_read: false,
        })
    }
}
