//! Error types for the dairy registry.

use crate::error::SupplyError;
use crate::framework::RegistryError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DairyError {
    #[error("Milk batch not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Supply(#[from] SupplyError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<RegistryError> for DairyError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::NotFound(id) => DairyError::NotFound(id),
            RegistryError::EntityError(inner) => match inner.downcast::<DairyError>() {
                Ok(own) => *own,
                Err(other) => DairyError::ActorCommunicationError(other.to_string()),
            },
            other => DairyError::ActorCommunicationError(other.to_string()),
        }
    }
}
