//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from API/IO errors.

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// The route has no direction with this name
    #[error("route {route} has no direction named {name:?}")]
    UnknownDirection { route: String, name: String },
}
