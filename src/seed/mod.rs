pub mod fixtures;
pub mod guard;

use std::io;

use thiserror::Error;

use crate::model::record::LoadBatch;
use crate::pipeline::ConvertError;

/// Answers "does this entity already have rows?" for the seed guard.
pub trait SeedStore {
    fn count_rows(&self, entity: &str) -> Result<u64, StoreError>;
}

/// Receives the aggregated batch for bulk insertion.
pub trait BatchLoader {
    fn load(&mut self, batch: &LoadBatch) -> Result<(), LoadError>;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("entity state for '{0}' is not a JSON array")]
    NotAnArray(String),
    #[error("unreadable entity state: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("duplicate primary key {pk} for entity '{entity}'")]
    DuplicatePrimaryKey { entity: String, pk: String },
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("convert error: {0}")]
    Convert(#[from] ConvertError),
    #[error("load error: {0}")]
    Load(#[from] LoadError),
}

/// Result of one seeding pass. Computed once per process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded { loaded: Vec<(String, usize)> },
    SkippedAlreadySeeded { sentinel_rows: u64 },
}
