use crate::formats::common::is_c_identifier;
use crate::raster::PixelGrid;

use super::error::ProgmemError;
use super::layout;

/// Render a grid as a named embedded-literal declaration, scan order, eight
/// values per line.
pub fn write_literal(grid: &PixelGrid, name: &str) -> Result<String, ProgmemError> {
    if !is_c_identifier(name) {
        return Err(ProgmemError::InvalidIdentifier {
            name: name.to_string(),
        });
    }

    let config = grid.config();
    let data = grid.as_bytes();
    let mut out = String::with_capacity(data.len() * 5 + 64);
    out.push_str(&format!(
        "{}{}{}{},{},\n",
        layout::DECL_PREFIX,
        name,
        layout::DECL_INFIX,
        config.width,
        config.height
    ));
    for (index, byte) in data.iter().enumerate() {
        out.push_str(&format!("{}{:02x},", layout::TOKEN_PREFIX, byte));
        if (index + 1) % layout::VALUES_PER_LINE == 0 {
            out.push('\n');
        }
    }
    if data.len() % layout::VALUES_PER_LINE != 0 {
        out.push('\n');
    }
    out.push_str(layout::TERMINATOR);
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::write_literal;
    use crate::formats::progmem::error::ProgmemError;
    use crate::formats::progmem::parser::parse_bytes;
    use crate::raster::{PixelGrid, RasterConfig};

    fn sample_grid() -> PixelGrid {
        let data: Vec<u8> = (0..512u32).map(|i| (i % 251) as u8).collect();
        PixelGrid::from_bytes(RasterConfig::MONO_64X64, data).unwrap()
    }

    #[test]
    fn declaration_shape() {
        let literal = write_literal(&sample_grid(), "left_arrow").unwrap();
        let mut lines = literal.lines();
        assert_eq!(
            lines.next(),
            Some("const unsigned char left_arrow[] PROGMEM={64,64,")
        );
        let data_lines: Vec<&str> = literal
            .lines()
            .filter(|line| line.starts_with("0x"))
            .collect();
        assert_eq!(data_lines.len(), 64);
        assert_eq!(data_lines[0].split(',').filter(|t| !t.is_empty()).count(), 8);
        assert_eq!(literal.lines().last(), Some("};"));
    }

    #[test]
    fn literal_round_trips_through_the_parser() {
        let grid = sample_grid();
        let literal = write_literal(&grid, "glyph").unwrap();
        let reparsed = parse_bytes(literal.lines()).unwrap();
        assert_eq!(reparsed, grid.as_bytes());
    }

    #[test]
    fn rejects_invalid_identifier() {
        let err = write_literal(&sample_grid(), "u2190-left").unwrap_err();
        match err {
            ProgmemError::InvalidIdentifier { name } => assert_eq!(name, "u2190-left"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_leading_digit() {
        assert!(write_literal(&sample_grid(), "2190_arrow").is_err());
    }
}
