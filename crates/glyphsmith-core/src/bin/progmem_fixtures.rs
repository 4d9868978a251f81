use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use glyphsmith_core::formats::progmem::write_literal;
use glyphsmith_core::raster::{PixelGrid, RasterConfig};

const FIXTURE_BANNER: &str = "// golden fixture input, written by the progmem_fixtures bin\n\n";

const SPEC_TEXT: &str = "\
symbol keyboard glyph table
lines without a four-digit code and dash are notes and are skipped

2190: \u{2190} - left_arrow
2191: \u{2191} - up_arrow
2192: \u{2192} - right_arrow
2193: \u{2193} - down_arrow
221e: \u{221e} - infinity
9999: \u{2665} - heart
";

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let root = PathBuf::from("tests").join("golden");
    write_box_fixture(&root)?;
    write_stripes_fixture(&root)?;
    write_glyphs_fixture(&root)?;
    Ok(())
}

fn write_box_fixture(root: &Path) -> Result<(), String> {
    let literal = render(build_grid(box_outline_row)?, "box_outline")?;
    write_input(&root.join("box"), &format!("{FIXTURE_BANNER}{literal}"))
}

fn write_stripes_fixture(root: &Path) -> Result<(), String> {
    let even = render(build_grid(stripes_even_row)?, "stripes_even")?;
    let odd = render(build_grid(stripes_odd_row)?, "stripes_odd")?;
    write_input(&root.join("stripes"), &format!("{FIXTURE_BANNER}{even}\n{odd}"))
}

fn write_glyphs_fixture(root: &Path) -> Result<(), String> {
    let dir = root.join("glyphs");
    fs::create_dir_all(&dir).map_err(|err| format!("failed to create {}: {}", dir.display(), err))?;
    let path = dir.join("spec.txt");
    fs::write(&path, SPEC_TEXT).map_err(|err| format!("failed to write {}: {}", path.display(), err))
}

fn write_input(dir: &Path, content: &str) -> Result<(), String> {
    fs::create_dir_all(dir).map_err(|err| format!("failed to create {}: {}", dir.display(), err))?;
    let path = dir.join("input.c");
    fs::write(&path, content).map_err(|err| format!("failed to write {}: {}", path.display(), err))
}

fn render(grid: PixelGrid, name: &str) -> Result<String, String> {
    write_literal(&grid, name).map_err(|err| format!("failed to render {}: {}", name, err))
}

fn build_grid(row_pattern: fn(usize) -> [u8; 8]) -> Result<PixelGrid, String> {
    let config = RasterConfig::MONO_64X64;
    let mut data = Vec::with_capacity(config.data_bytes());
    for row in 0..config.height as usize {
        data.extend_from_slice(&row_pattern(row));
    }
    PixelGrid::from_bytes(config, data).map_err(|err| err.to_string())
}

fn box_outline_row(row: usize) -> [u8; 8] {
    match row {
        0 | 63 => [0xFF; 8],
        _ => [0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01],
    }
}

fn stripes_even_row(row: usize) -> [u8; 8] {
    if row % 2 == 0 { [0xAA; 8] } else { [0x55; 8] }
}

fn stripes_odd_row(row: usize) -> [u8; 8] {
    if row % 2 == 0 { [0x55; 8] } else { [0xAA; 8] }
}
