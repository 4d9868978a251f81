use crate::raster::{GridError, PixelGrid, RasterConfig};

use super::error::BmpError;

/// Encode a grid into a bitmap-file buffer: header bytes, then pixel rows
/// bottom-up (row `height-1` first). Output length is exactly
/// `header.len() + height * row_bytes`.
pub fn encode(grid: &PixelGrid, header: &[u8]) -> Result<Vec<u8>, BmpError> {
    let config = grid.config();
    let expected = config.data_bytes();
    let data = grid.as_bytes();
    if data.len() != expected {
        return Err(BmpError::DimensionMismatch {
            expected,
            actual: data.len(),
        });
    }

    let mut out = Vec::with_capacity(header.len() + expected);
    out.extend_from_slice(header);
    out.extend_from_slice(&reverse_row_order(data, config.row_bytes()));
    Ok(out)
}

/// Decode a bitmap-file buffer back into a scan-order grid. The payload
/// after `header_len` bytes must be exactly `height * row_bytes` long.
pub fn decode(
    buffer: &[u8],
    header_len: usize,
    config: RasterConfig,
) -> Result<PixelGrid, BmpError> {
    let expected = config.data_bytes();
    let payload = buffer.get(header_len..).unwrap_or(&[]);
    if payload.len() != expected || payload.len() % config.row_bytes().max(1) != 0 {
        return Err(BmpError::TruncatedFile {
            expected,
            actual: payload.len(),
        });
    }

    let data = reverse_row_order(payload, config.row_bytes());
    PixelGrid::from_bytes(config, data).map_err(|err| match err {
        GridError::DimensionMismatch { expected, actual } => {
            BmpError::DimensionMismatch { expected, actual }
        }
    })
}

/// Shared by both directions: bottom-up storage is scan order with the row
/// sequence reversed, bytes within a row untouched.
fn reverse_row_order(data: &[u8], row_bytes: usize) -> Vec<u8> {
    if row_bytes == 0 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(data.len());
    for row in data.chunks_exact(row_bytes).rev() {
        out.extend_from_slice(row);
    }
    out
}
