//! Glyphsmith core library for symbol-keyboard glyph conversion.
//!
//! This crate implements the conversion pipeline used by the CLI: the
//! `source` layer lifts named byte-array declarations out of firmware
//! source, the `formats` layer holds the two wire formats (embedded
//! PROGMEM literal and fixed-header bitmap file, each with layout/parser/
//! error modules), and the `convert` layer orchestrates batches and
//! aggregates results into a deterministic manifest. Parsing and encoding
//! are byte-oriented and side-effect free; all I/O is isolated in `source`
//! and `convert`.
//!
//! Invariants:
//! - A `PixelGrid` that exists is exactly `height` rows of `width/8` bytes.
//! - Bitmap encode/decode share one row-reversal helper, so the round-trip
//!   identity is structural.
//! - Manifest output is deterministic and stable across runs.
//! - No partial artifact is ever visible at a final output path.
//!
//! Version française (résumé):
//! Cette crate fournit le cœur de conversion : extraction des déclarations
//! -> analyse -> codec bitmap -> manifeste déterministe. Les E/S restent
//! dans `source` et `convert`, les constantes de format dans les modules
//! `layout`. Garanties : grille invariante par construction, aller-retour
//! structurel du codec, aucun artefact partiel visible.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use glyphsmith_core::convert::export_bitmaps;
//! use glyphsmith_core::formats::bmp::layout::MONO_64X64_HEADER;
//! use glyphsmith_core::raster::RasterConfig;
//!
//! let outcome = export_bitmaps(
//!     Path::new("bitmaps.c"),
//!     Path::new("bmp"),
//!     RasterConfig::MONO_64X64,
//!     &MONO_64X64_HEADER,
//! )?;
//! println!("{} artifacts written", outcome.manifest.artifacts.len());
//! # Ok::<(), glyphsmith_core::convert::ConvertError>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod convert;
pub mod formats;
pub mod glyphs;
pub mod raster;
pub mod source;

pub use convert::{BatchOutcome, ConvertError};
pub use raster::{GridError, PixelGrid, RasterConfig};

/// Current manifest schema version.
pub const MANIFEST_VERSION: u32 = 1;
/// Default timestamp used when the input's modification time is unknown.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// Batch-conversion manifest with deterministic ordering.
///
/// # Examples
/// ```
/// use glyphsmith_core::make_stub_manifest;
///
/// let manifest = make_stub_manifest("bitmaps.c", 123);
/// assert_eq!(manifest.manifest_version, glyphsmith_core::MANIFEST_VERSION);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Manifest schema version (not the binary version).
    pub manifest_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// RFC3339 timestamp, taken from the input's modification time.
    pub generated_at: String,
    /// Input file metadata.
    pub input: InputInfo,
    /// Written artifacts, sorted by name.
    pub artifacts: Vec<ArtifactSummary>,
}

/// Tool metadata embedded in manifests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "glyphsmith").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input file metadata embedded in manifests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the pipeline.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// One written artifact.
///
/// # Examples
/// ```
/// use glyphsmith_core::ArtifactSummary;
///
/// let artifact = ArtifactSummary {
///     name: "left_arrow".to_string(),
///     kind: "bitmap".to_string(),
///     path: "bmp/left_arrow.bmp".to_string(),
///     bytes: 574,
/// };
/// assert_eq!(artifact.kind, "bitmap");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactSummary {
    /// Artifact name (declaration identifier or provisioned filename).
    pub name: String,
    /// Artifact kind: "bitmap", "literal", or "template".
    pub kind: String,
    /// Output path as written.
    pub path: String,
    /// Output size in bytes.
    pub bytes: u64,
}

/// Build a stub manifest with base fields filled and no artifacts.
///
/// # Examples
/// ```
/// use glyphsmith_core::make_stub_manifest;
///
/// let manifest = make_stub_manifest("bitmaps.c", 4096);
/// assert!(manifest.artifacts.is_empty());
/// assert_eq!(manifest.input.bytes, 4096);
/// ```
pub fn make_stub_manifest(input_path: &str, input_bytes: u64) -> Manifest {
    Manifest {
        manifest_version: MANIFEST_VERSION,
        tool: ToolInfo {
            name: "glyphsmith".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        artifacts: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_serializes_with_stable_field_names() {
        let mut manifest = make_stub_manifest("bitmaps.c", 1);
        manifest.artifacts.push(ArtifactSummary {
            name: "glyph".to_string(),
            kind: "bitmap".to_string(),
            path: "bmp/glyph.bmp".to_string(),
            bytes: 574,
        });

        let value = serde_json::to_value(&manifest).expect("manifest json");
        assert_eq!(value["manifest_version"], 1);
        assert_eq!(value["tool"]["name"], "glyphsmith");
        assert_eq!(value["artifacts"][0]["kind"], "bitmap");
        assert_eq!(value["artifacts"][0]["bytes"], 574);
    }

    #[test]
    fn manifest_round_trips_through_json() {
        let manifest = make_stub_manifest("bitmaps.c", 42);
        let json = serde_json::to_string(&manifest).expect("serialize");
        let back: Manifest = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.input.path, "bitmaps.c");
        assert_eq!(back.input.bytes, 42);
        assert_eq!(back.generated_at, DEFAULT_GENERATED_AT);
    }
}
