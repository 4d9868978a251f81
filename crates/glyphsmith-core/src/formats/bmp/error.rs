use thiserror::Error;

#[derive(Debug, Error)]
pub enum BmpError {
    #[error("dimension mismatch: expected {expected} pixel bytes, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("truncated file: expected {expected} pixel bytes after the header, got {actual}")]
    TruncatedFile { expected: usize, actual: usize },
}
