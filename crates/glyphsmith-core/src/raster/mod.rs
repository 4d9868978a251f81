//! Raster data model.
//!
//! `RasterConfig` carries the pixel dimensions as explicit configuration so
//! the codec stays reusable for other fixed-size formats; `PixelGrid` is the
//! central entity, an invariant-checked buffer of packed scan-order rows.
//! Construction is the only place the row/column invariant is established:
//! a grid that exists is always exactly `height` rows of `row_bytes` bytes.

use thiserror::Error;

/// Fixed raster dimensions for one conversion run.
///
/// `width * bits_per_pixel` must describe whole-byte rows.
///
/// # Examples
/// ```
/// use glyphsmith_core::raster::RasterConfig;
///
/// let config = RasterConfig::MONO_64X64;
/// assert_eq!(config.row_bytes(), 8);
/// assert_eq!(config.data_bytes(), 512);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Bits per pixel (1 for monochrome).
    pub bits_per_pixel: u32,
}

impl RasterConfig {
    /// The project's fixed format: 64x64, one bit per pixel.
    pub const MONO_64X64: RasterConfig = RasterConfig {
        width: 64,
        height: 64,
        bits_per_pixel: 1,
    };

    /// Packed bytes per row.
    pub fn row_bytes(&self) -> usize {
        (self.width * self.bits_per_pixel) as usize / 8
    }

    /// Total pixel-data bytes for the whole grid.
    pub fn data_bytes(&self) -> usize {
        self.row_bytes() * self.height as usize
    }
}

#[derive(Debug, Error)]
pub enum GridError {
    #[error("dimension mismatch: expected {expected} pixel bytes, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// A monochrome raster held in scan order (top row first, MSB-first bytes).
///
/// # Examples
/// ```
/// use glyphsmith_core::raster::{PixelGrid, RasterConfig};
///
/// let grid = PixelGrid::from_bytes(RasterConfig::MONO_64X64, vec![0u8; 512])?;
/// assert_eq!(grid.rows().count(), 64);
/// # Ok::<(), glyphsmith_core::raster::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    config: RasterConfig,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Build a grid from scan-order bytes, rejecting truncated or oversized
    /// input rather than padding it.
    pub fn from_bytes(config: RasterConfig, data: Vec<u8>) -> Result<Self, GridError> {
        let expected = config.data_bytes();
        if data.len() != expected {
            return Err(GridError::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { config, data })
    }

    pub fn config(&self) -> RasterConfig {
        self.config
    }

    /// The flattened scan-order byte sequence.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Rows in scan order, each `row_bytes` long.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.config.row_bytes().max(1))
    }

    pub fn row(&self, index: usize) -> Option<&[u8]> {
        let row_bytes = self.config.row_bytes();
        let start = index.checked_mul(row_bytes)?;
        self.data.get(start..start + row_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::{GridError, PixelGrid, RasterConfig};

    #[test]
    fn from_bytes_accepts_exact_length() {
        let grid = PixelGrid::from_bytes(RasterConfig::MONO_64X64, vec![0u8; 512]).unwrap();
        assert_eq!(grid.as_bytes().len(), 512);
    }

    #[test]
    fn from_bytes_rejects_truncated_input() {
        let err = PixelGrid::from_bytes(RasterConfig::MONO_64X64, vec![0u8; 511]).unwrap_err();
        let GridError::DimensionMismatch { expected, actual } = err;
        assert_eq!(expected, 512);
        assert_eq!(actual, 511);
    }

    #[test]
    fn from_bytes_rejects_oversized_input() {
        let err = PixelGrid::from_bytes(RasterConfig::MONO_64X64, vec![0u8; 513]).unwrap_err();
        assert!(err.to_string().contains("expected 512"));
    }

    #[test]
    fn rows_iterate_in_scan_order() {
        let mut data = vec![0u8; 512];
        data[0] = 0xAA;
        data[504] = 0xBB;
        let grid = PixelGrid::from_bytes(RasterConfig::MONO_64X64, data).unwrap();

        let rows: Vec<&[u8]> = grid.rows().collect();
        assert_eq!(rows.len(), 64);
        assert_eq!(rows[0][0], 0xAA);
        assert_eq!(rows[63][0], 0xBB);
        assert_eq!(grid.row(0).unwrap()[0], 0xAA);
        assert_eq!(grid.row(63).unwrap()[0], 0xBB);
        assert!(grid.row(64).is_none());
    }
}
