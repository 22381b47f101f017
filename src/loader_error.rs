use thiserror::Error;

use crate::plate_store::RemoveHandle;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoaderError {
    #[error("Invalid plate weight {0:?}, expected a positive number of kilograms.")]
    InvalidWeight(String),
    #[error("Unknown bar {0:?}, expected one of o, w, t or a weight in kilograms.")]
    UnknownBar(String),
    #[error("Cannot understand command {0:?}.")]
    InvalidCommand(String),
    #[error("No plate at position {index}, the sleeve holds {len}.")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Plate handle {handle} is stale, the sleeve is now at generation {generation}.")]
    StaleHandle { handle: RemoveHandle, generation: u64 },
}
