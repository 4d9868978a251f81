use crate::formats::common::is_file_safe_name;

use super::error::GlyphError;

/// One entry of the glyph spec: a four-digit code, the mapped symbol, and a
/// file-safe name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphEntry {
    pub code: String,
    pub symbol: String,
    pub name: String,
}

impl GlyphEntry {
    /// Deterministic bitmap filename for this entry.
    pub fn bitmap_filename(&self) -> String {
        format!("u{}_{}.bmp", self.code, self.name)
    }
}

/// Parse spec lines into entries, in input order.
///
/// Lines that do not have the `NNNN: symbol - name` shape are prose and are
/// skipped; a well-shaped line with a name outside `[A-Za-z0-9_]+` is an
/// error, since it would produce an unusable artifact name downstream.
pub fn parse_spec(text: &str) -> Result<Vec<GlyphEntry>, GlyphError> {
    let mut entries = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split(':').collect();
        if parts.len() != 2 {
            continue;
        }
        let code = parts[0];
        if !is_four_digit_code(code) {
            continue;
        }
        let Some((symbol, name)) = parts[1].split_once('-') else {
            continue;
        };
        let symbol = symbol.trim();
        let name = name.trim();
        if !is_file_safe_name(name) {
            return Err(GlyphError::InvalidIdentifier {
                name: name.to_string(),
                line: index + 1,
            });
        }
        entries.push(GlyphEntry {
            code: code.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
        });
    }
    Ok(entries)
}

fn is_four_digit_code(code: &str) -> bool {
    code.len() == 4 && code.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::parse_spec;
    use crate::glyphs::error::GlyphError;

    #[test]
    fn parses_entries_in_input_order() {
        let text = "2190: \u{2190} - left_arrow\n2191: \u{2191} - up_arrow\n";
        let entries = parse_spec(text).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].code, "2190");
        assert_eq!(entries[0].symbol, "\u{2190}");
        assert_eq!(entries[0].name, "left_arrow");
        assert_eq!(entries[0].bitmap_filename(), "u2190_left_arrow.bmp");
        assert_eq!(entries[1].code, "2191");
    }

    #[test]
    fn prose_lines_are_skipped() {
        let text = "\
symbol keyboard glyph table

2190: a - alpha
notes: this line has a colon but no code
123: b - short_code
12345: c - long_code
2191 missing colon
2192: no dash here
";
        let entries = parse_spec(text).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "alpha");
    }

    #[test]
    fn dashed_name_is_rejected_not_misparsed() {
        // everything after the first dash is the name, so "left-arrow" is
        // surfaced whole instead of being silently cut at the second dash
        let err = parse_spec("2190: x - left-arrow\n").unwrap_err();
        match err {
            GlyphError::InvalidIdentifier { name, .. } => assert_eq!(name, "left-arrow"),
        }
    }

    #[test]
    fn invalid_name_is_an_error() {
        let err = parse_spec("2190: x - left arrow\n").unwrap_err();
        match err {
            GlyphError::InvalidIdentifier { name, line } => {
                assert_eq!(name, "left arrow");
                assert_eq!(line, 1);
            }
        }
    }

    #[test]
    fn empty_name_is_an_error() {
        assert!(parse_spec("2190: x -\n").is_err());
    }
}
