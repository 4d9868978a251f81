use crate::formats::common::is_c_identifier;
use crate::formats::progmem::layout;

use super::{Declaration, SourceError};

/// Split source text into named declaration blocks. A block opens at a line
/// matching the declaration prefix and closes at the `};` terminator; lines
/// outside any block are ignored.
pub fn extract_declarations(text: &str) -> Result<Vec<Declaration>, SourceError> {
    let mut declarations = Vec::new();
    let mut current: Option<Declaration> = None;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        match current.take() {
            Some(mut decl) => {
                if line == layout::TERMINATOR {
                    declarations.push(decl);
                } else {
                    decl.lines.push(raw.to_string());
                    current = Some(decl);
                }
            }
            None => {
                if let Some(name) = declaration_name(line) {
                    if !is_c_identifier(name) {
                        return Err(SourceError::InvalidIdentifier {
                            name: name.to_string(),
                            line: index + 1,
                        });
                    }
                    current = Some(Declaration {
                        name: name.to_string(),
                        lines: Vec::new(),
                    });
                }
            }
        }
    }

    if let Some(decl) = current {
        return Err(SourceError::Unterminated { name: decl.name });
    }
    Ok(declarations)
}

fn declaration_name(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(layout::DECL_PREFIX)?;
    let end = rest.find(layout::DECL_INFIX)?;
    Some(&rest[..end])
}
