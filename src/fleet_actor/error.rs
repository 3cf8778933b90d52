//! Error types for the fleet registry.

use crate::error::SupplyError;
use crate::framework::RegistryError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FleetError {
    #[error("Transport not found: {0}")]
    NotFound(String),

    /// Invalid transport parameters, a bad distance, or a non-product in a load.
    #[error(transparent)]
    Supply(#[from] SupplyError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<RegistryError> for FleetError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::NotFound(id) => FleetError::NotFound(id),
            RegistryError::EntityError(inner) => match inner.downcast::<FleetError>() {
                Ok(own) => *own,
                Err(other) => FleetError::ActorCommunicationError(other.to_string()),
            },
            other => FleetError::ActorCommunicationError(other.to_string()),
        }
    }
}
