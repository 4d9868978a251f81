//! Embedded-literal format (firmware byte arrays).
//!
//! The parser recovers the ordered byte sequence from the body of a
//! `const unsigned char NAME[] PROGMEM={W,H,` declaration: a line is a data
//! line iff its first non-whitespace characters are the `0x` token prefix;
//! everything else (the declaration line, comments, the `};` terminator) is
//! ignored. A token that is not a valid byte-range hex literal fails the
//! whole parse, because silently dropping one byte would desynchronize
//! every subsequent row.
//!
//! The writer is the inverse direction: it renders a grid's bytes in scan
//! order, eight comma-separated literals per line, wrapped in the same
//! declaration shape. Text constants live in `layout`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod writer;

pub use parser::parse_bytes;
pub use writer::write_literal;
