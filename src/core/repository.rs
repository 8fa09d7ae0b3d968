use async_trait::async_trait;
use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

// Repository persists a whole collection as a single unit. There is no partial-update path,
// callers load, mutate their copy and save it back.
#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // loads the full collection, an absent or undecodable backing store yields an empty one
    async fn load(&self) -> LibraryResult<Vec<Entity>>;

    // replaces the full collection
    async fn save(&self, entities: &[Entity]) -> LibraryResult<()>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    File,
    Memory,
}

impl TryFrom<String> for RepositoryStore {
    type Error = LibraryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "file" => Ok(RepositoryStore::File),
            "memory" => Ok(RepositoryStore::Memory),
            _ => Err(LibraryError::validation(
                format!("unknown repository store {:?}", s).as_str(), None)),
        }
    }
}

impl Display for RepositoryStore {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RepositoryStore::File => write!(f, "file"),
            RepositoryStore::Memory => write!(f, "memory"),
        }
    }
}
