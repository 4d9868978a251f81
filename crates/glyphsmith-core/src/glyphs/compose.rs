use super::parser::GlyphEntry;

/// Render one input-method mapping line: the four code digits as a
/// Multi_key sequence, then the quoted symbol.
pub fn compose_line(entry: &GlyphEntry) -> String {
    let keys: String = entry.code.chars().map(|d| format!(" <{d}>")).collect();
    format!("<Multi_key>{keys} : \"{}\"", entry.symbol)
}

/// Render the whole compose document, one line per entry, input order.
pub fn write_compose(entries: &[GlyphEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&compose_line(entry));
        out.push('\n');
    }
    out
}
