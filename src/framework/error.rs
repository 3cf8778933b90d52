//! Errors raised by the registry plumbing itself, as opposed to the entities it
//! manages.

/// Failures of the request/response round trip to a [`Registry`](super::Registry).
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Registry closed")]
    ActorClosed,
    #[error("Registry dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// The entity hook returned an error; the boxed value is the entity's own error type.
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
