use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlyphError {
    #[error("invalid glyph name '{name}' on line {line}")]
    InvalidIdentifier { name: String, line: usize },
}
