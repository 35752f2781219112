//! Error taxonomy shared by the store, the dispatcher, and the codecs.

/// Every failure a catalog service can report to a caller.
///
/// Each variant maps to exactly one response at the protocol boundary;
/// no variant is retried or silently swallowed. `Serialization` is the
/// only kind with a secondary (plain-text) response path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Classification found no known operation marker in the payload.
    #[error("unknown operation")]
    UnknownOperation,
    /// Parameter extraction failed under both strict and fallback parsing.
    #[error("malformed request: {0}")]
    MalformedRequest(String),
    /// The store has no record for the requested identifier.
    #[error("record with ID {id} not found")]
    NotFound { id: u32 },
    /// A required field was missing or empty on create.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The codec could not render a value as wire bytes.
    #[error("failed to serialize response: {0}")]
    Serialization(String),
}
