//! Bitmap-file codec.
//!
//! One bidirectional module with two entry points: `encode` prepends the
//! configured header and stores rows bottom-up; `decode` strips the header
//! and restores scan order. Both directions go through the same row-order
//! reversal helper, so the round-trip identity holds structurally rather
//! than by keeping two mirrored implementations in sync.
//!
//! The header is an opaque byte sequence at this layer; the concrete
//! monochrome 64x64 header used by the project lives in `layout` as data.

pub mod codec;
pub mod error;
pub mod layout;

pub use codec::{decode, encode};
