//! Conversion pipeline.
//!
//! Drives source extraction, parsing, and the codec, and owns every output
//! write. Artifacts are fully buffered in memory, written to a `.tmp`
//! sibling, and renamed into place, so no partial output ever lands at a
//! readable final path. A failure aborts only the artifact being converted;
//! the rest of the batch proceeds and the failure is reported alongside the
//! manifest.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use thiserror::Error;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::formats::bmp::{self, error::BmpError};
use crate::formats::progmem::{self, error::ProgmemError};
use crate::glyphs::{self, error::GlyphError};
use crate::raster::{GridError, PixelGrid, RasterConfig};
use crate::source::{self, Declaration, SourceError};
use crate::{ArtifactSummary, DEFAULT_GENERATED_AT, Manifest, make_stub_manifest};

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("source error: {0}")]
    Source(#[from] SourceError),
    #[error("parse error: {0}")]
    Progmem(#[from] ProgmemError),
    #[error("grid error: {0}")]
    Grid(#[from] GridError),
    #[error("bitmap error: {0}")]
    Bmp(#[from] BmpError),
    #[error("glyph spec error: {0}")]
    Glyph(#[from] GlyphError),
}

/// A per-artifact failure captured without aborting the batch.
#[derive(Debug)]
pub struct ArtifactFailure {
    pub name: String,
    pub error: ConvertError,
}

/// Result of one batch run: the manifest of artifacts actually written,
/// plus the failures encountered along the way.
#[derive(Debug)]
pub struct BatchOutcome {
    pub manifest: Manifest,
    pub failures: Vec<ArtifactFailure>,
}

/// Convert every declaration in a firmware source file into a bitmap file
/// named `{identifier}.bmp` under `out_dir`.
pub fn export_bitmaps(
    input: &Path,
    out_dir: &Path,
    config: RasterConfig,
    header: &[u8],
) -> Result<BatchOutcome, ConvertError> {
    let declarations = source::read_declarations(input)?;
    let mut manifest = manifest_for_input(input)?;
    let mut failures = Vec::new();

    fs::create_dir_all(out_dir)?;
    for decl in &declarations {
        match export_one(decl, out_dir, config, header) {
            Ok(summary) => manifest.artifacts.push(summary),
            Err(error) => failures.push(ArtifactFailure {
                name: decl.name.clone(),
                error,
            }),
        }
    }

    manifest.artifacts.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(BatchOutcome { manifest, failures })
}

fn export_one(
    decl: &Declaration,
    out_dir: &Path,
    config: RasterConfig,
    header: &[u8],
) -> Result<ArtifactSummary, ConvertError> {
    let bytes = progmem::parse_bytes(decl.lines.iter().map(String::as_str))?;
    let grid = PixelGrid::from_bytes(config, bytes)?;
    let encoded = bmp::encode(&grid, header)?;

    let path = out_dir.join(format!("{}.bmp", decl.name));
    persist(&path, &encoded)?;
    Ok(ArtifactSummary {
        name: decl.name.clone(),
        kind: "bitmap".to_string(),
        path: path.display().to_string(),
        bytes: encoded.len() as u64,
    })
}

/// Convert one bitmap file into an embedded-literal declaration named after
/// the file stem, written as `{identifier}.c` under `out_dir`.
pub fn embed_bitmap(
    input: &Path,
    out_dir: &Path,
    config: RasterConfig,
    header_len: usize,
) -> Result<ArtifactSummary, ConvertError> {
    let name = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default();

    let buffer = fs::read(input)?;
    let grid = bmp::decode(&buffer, header_len, config)?;
    let literal = progmem::write_literal(&grid, &name)?;

    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(format!("{name}.c"));
    persist(&path, literal.as_bytes())?;
    Ok(ArtifactSummary {
        name,
        kind: "literal".to_string(),
        path: path.display().to_string(),
        bytes: literal.len() as u64,
    })
}

/// Provision a placeholder bitmap for every spec entry that does not have
/// one yet. Existing files are left untouched and do not appear in the
/// manifest.
pub fn provision_templates(
    spec_path: &Path,
    template: &Path,
    out_dir: &Path,
) -> Result<Manifest, ConvertError> {
    let text = fs::read_to_string(spec_path)?;
    let entries = glyphs::parse_spec(&text)?;
    let mut manifest = manifest_for_input(spec_path)?;

    fs::create_dir_all(out_dir)?;
    for entry in &entries {
        let filename = entry.bitmap_filename();
        let path = out_dir.join(&filename);
        if path.exists() {
            continue;
        }
        let bytes = fs::read(template)?;
        persist(&path, &bytes)?;
        manifest.artifacts.push(ArtifactSummary {
            name: filename,
            kind: "template".to_string(),
            path: path.display().to_string(),
            bytes: bytes.len() as u64,
        });
    }

    manifest.artifacts.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(manifest)
}

/// Render the compose document for a spec file.
pub fn compose_from_spec(spec_path: &Path) -> Result<String, ConvertError> {
    let text = fs::read_to_string(spec_path)?;
    let entries = glyphs::parse_spec(&text)?;
    Ok(glyphs::write_compose(&entries))
}

fn manifest_for_input(input: &Path) -> Result<Manifest, ConvertError> {
    let meta = fs::metadata(input)?;
    let mut manifest = make_stub_manifest(&input.display().to_string(), meta.len());
    manifest.generated_at = meta
        .modified()
        .ok()
        .and_then(mtime_to_rfc3339)
        .unwrap_or_else(|| DEFAULT_GENERATED_AT.to_string());
    Ok(manifest)
}

fn mtime_to_rfc3339(mtime: SystemTime) -> Option<String> {
    OffsetDateTime::from(mtime).format(&Rfc3339).ok()
}

/// Write fully, then rename into place. The final path never holds a
/// partial artifact.
fn persist(path: &Path, bytes: &[u8]) -> Result<(), std::io::Error> {
    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    if let Err(err) = fs::write(&tmp, bytes) {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ConvertError, embed_bitmap, export_bitmaps};
    use crate::formats::bmp::layout::{MONO_64X64_HEADER, MONO_HEADER_BYTES};
    use crate::raster::RasterConfig;
    use std::fs;

    const GOOD_AND_BAD: &str = "\
const unsigned char good[] PROGMEM={64,64,
GOOD_BYTES};

const unsigned char bad[] PROGMEM={64,64,
0xZZ,
};
";

    fn good_and_bad_source() -> String {
        let mut body = String::new();
        for chunk in 0..64 {
            let row: Vec<String> = (0..8).map(|i| format!("0x{:02x}", (chunk + i) % 256)).collect();
            body.push_str(&row.join(","));
            body.push_str(",\n");
        }
        GOOD_AND_BAD.replace("GOOD_BYTES", &body)
    }

    #[test]
    fn failures_do_not_block_other_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bitmaps.c");
        fs::write(&input, good_and_bad_source()).unwrap();
        let out_dir = dir.path().join("bmp");

        let outcome = export_bitmaps(
            &input,
            &out_dir,
            RasterConfig::MONO_64X64,
            &MONO_64X64_HEADER,
        )
        .unwrap();

        assert_eq!(outcome.manifest.artifacts.len(), 1);
        assert_eq!(outcome.manifest.artifacts[0].name, "good");
        assert_eq!(outcome.manifest.artifacts[0].bytes, 574);
        assert!(out_dir.join("good.bmp").exists());

        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].name, "bad");
        assert!(matches!(
            outcome.failures[0].error,
            ConvertError::Progmem(_)
        ));
        assert!(!out_dir.join("bad.bmp").exists());
        assert!(!out_dir.join("bad.bmp.tmp").exists());
    }

    #[test]
    fn export_then_embed_round_trips_the_literal() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bitmaps.c");
        fs::write(&input, good_and_bad_source()).unwrap();
        let bmp_dir = dir.path().join("bmp");
        let gen_dir = dir.path().join("gen");

        export_bitmaps(
            &input,
            &bmp_dir,
            RasterConfig::MONO_64X64,
            &MONO_64X64_HEADER,
        )
        .unwrap();
        let summary = embed_bitmap(
            &bmp_dir.join("good.bmp"),
            &gen_dir,
            RasterConfig::MONO_64X64,
            MONO_HEADER_BYTES,
        )
        .unwrap();

        assert_eq!(summary.kind, "literal");
        let literal = fs::read_to_string(gen_dir.join("good.c")).unwrap();
        assert!(literal.starts_with("const unsigned char good[] PROGMEM={64,64,"));
        assert!(literal.ends_with("};\n"));
    }

    #[test]
    fn truncated_bitmap_fails_embed() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("short.bmp");
        fs::write(&input, vec![0u8; MONO_HEADER_BYTES + 100]).unwrap();

        let err = embed_bitmap(
            &input,
            dir.path(),
            RasterConfig::MONO_64X64,
            MONO_HEADER_BYTES,
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::Bmp(_)));
        assert!(!dir.path().join("short.c").exists());
    }
}
