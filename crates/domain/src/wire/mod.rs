//! Wire codec for DNS messages (RFC 1035 §4).
//!
//! Pure and stateless over the input buffer: decoding and encoding never
//! touch shared state, so they are safe to call from any number of tasks.

pub mod name;

mod decoder;
mod encoder;

pub use decoder::decode_message;
pub use encoder::encode_message;

/// Fixed header size: six big-endian 16-bit fields.
pub const HEADER_LEN: usize = 12;

/// Maximum wire length of one name, terminator included.
pub const MAX_NAME_LEN: usize = 255;

/// Maximum length of one label.
pub const MAX_LABEL_LEN: usize = 63;

/// Hop budget for compression pointer chains. Each hop must also target a
/// strictly earlier offset, so this is a second line of defence.
pub const MAX_POINTER_HOPS: usize = 16;
