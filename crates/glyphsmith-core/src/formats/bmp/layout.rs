pub const SIGNATURE: &[u8; 2] = b"BM";

pub const FILE_SIZE_RANGE: std::ops::Range<usize> = 2..6;
pub const PIXEL_OFFSET_RANGE: std::ops::Range<usize> = 10..14;
pub const WIDTH_RANGE: std::ops::Range<usize> = 18..22;
pub const HEIGHT_RANGE: std::ops::Range<usize> = 22..26;

pub const FILE_HEADER_BYTES: usize = 14;
pub const INFO_HEADER_BYTES: usize = 40;
pub const PALETTE_BYTES: usize = 8;
pub const MONO_HEADER_BYTES: usize = FILE_HEADER_BYTES + INFO_HEADER_BYTES + PALETTE_BYTES;

/// Fixed header for bottom-up monochrome 64x64 files: BITMAPFILEHEADER,
/// BITMAPINFOHEADER, then a two-entry black/white palette. Total file size
/// is 574 bytes (62 header + 512 pixel bytes).
pub const MONO_64X64_HEADER: [u8; MONO_HEADER_BYTES] = [
    0x42, 0x4D, // "BM"
    0x3E, 0x02, 0x00, 0x00, // file size: 574
    0x00, 0x00, 0x00, 0x00, // reserved
    0x3E, 0x00, 0x00, 0x00, // pixel data offset: 62
    0x28, 0x00, 0x00, 0x00, // info header size: 40
    0x40, 0x00, 0x00, 0x00, // width: 64
    0x40, 0x00, 0x00, 0x00, // height: 64 (positive: bottom-up)
    0x01, 0x00, // planes
    0x01, 0x00, // bits per pixel
    0x00, 0x00, 0x00, 0x00, // compression: none
    0x00, 0x02, 0x00, 0x00, // pixel data size: 512
    0x00, 0x00, 0x00, 0x00, // x pixels per metre
    0x00, 0x00, 0x00, 0x00, // y pixels per metre
    0x02, 0x00, 0x00, 0x00, // palette colours
    0x02, 0x00, 0x00, 0x00, // important colours
    0x00, 0x00, 0x00, 0x00, // palette entry 0: black
    0xFF, 0xFF, 0xFF, 0xFF, // palette entry 1: white
];
