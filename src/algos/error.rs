use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum SelectError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("resource exhausted: {0}")]
    ResourceExhausted(String),
}
