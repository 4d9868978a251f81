use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProgmemError {
    #[error("malformed token '{token}' on line {line}")]
    MalformedToken { line: usize, token: String },
    #[error("invalid identifier '{name}'")]
    InvalidIdentifier { name: String },
}
