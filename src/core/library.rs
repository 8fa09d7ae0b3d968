use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum LibraryError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // The bibliographic API answered with a non-success status or could not be reached.
    // Transport failures carry 502 and timeouts carry 504.
    Upstream {
        message: String,
        status: u16,
    },
    // The bibliographic API answered but had no matching volume for the isbn.
    UpstreamEmpty {
        message: String,
    },
    // The backing file could not be decoded. Stores recover from this by treating the
    // collection as empty, so it never reaches a caller.
    MalformedLocalData {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn upstream(message: &str, status: u16) -> LibraryError {
        LibraryError::Upstream { message: message.to_string(), status }
    }

    pub fn upstream_empty(message: &str) -> LibraryError {
        LibraryError::UpstreamEmpty { message: message.to_string() }
    }

    pub fn malformed_local_data(message: &str) -> LibraryError {
        LibraryError::MalformedLocalData { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io {}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {}", err).as_str())
    }
}

impl From<reqwest::Error> for LibraryError {
    fn from(err: reqwest::Error) -> Self {
        let status = if err.is_timeout() {
            504
        } else if let Some(status) = err.status() {
            status.as_u16()
        } else {
            502
        };
        LibraryError::upstream(
            format!("Failed to fetch book details: {}", err).as_str(), status)
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Upstream { message, status } => {
                write!(f, "{} (upstream status {})", message, status)
            }
            LibraryError::UpstreamEmpty { message } => {
                write!(f, "{}", message)
            }
            LibraryError::MalformedLocalData { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;
