use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid event slug `{0}`")]
    InvalidSlug(String),
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
}
