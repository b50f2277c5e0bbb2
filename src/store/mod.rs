pub mod memory;
pub mod query;
pub mod seed;
pub mod traits;

pub use memory::MemoryStore;
pub use query::{
    Comparison, CountBucket, CountField, Predicate, PropertyQuery, SortOrder, TextField,
};
pub use seed::SeedData;
pub use traits::{AccountStore, PropertyStore, ViewOutcome};

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    /// Backend could not be reached; the in-memory store never raises it
    #[allow(dead_code)]
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
