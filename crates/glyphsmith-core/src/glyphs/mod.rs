//! Glyph-spec collaborators.
//!
//! The spec file is a human-authored document mapping four-digit codes to a
//! symbol and a name (`2190: <- - left_arrow`). The reader yields the
//! well-formed entries in input order and skips prose lines; the compose
//! writer turns entries into keyboard input-method mapping lines. Neither
//! touches the raster core.

pub mod compose;
pub mod error;
pub mod parser;

pub use compose::write_compose;
pub use parser::{GlyphEntry, parse_spec};
