//! Errors raised by identity and lookup collaborators.
//!
//! None of these reach a render path: the resolver and loader log them and
//! fall back to the logged-out shape.

/// Failure inside an identity-provider or lookup implementation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IdentityError {
    /// The identity provider could not be reached or rejected the request.
    #[error("identity provider unavailable: {0}")]
    Provider(String),

    /// The identity provider answered with something that is not an identity.
    #[error("malformed identity: {0}")]
    Malformed(String),

    /// A profile or organization lookup failed.
    #[error("lookup failed: {0}")]
    Lookup(String),
}
