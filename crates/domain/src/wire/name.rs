//! Length-prefixed label sequence codec, with decode-time support for
//! backward compression pointers.

use super::{MAX_LABEL_LEN, MAX_NAME_LEN, MAX_POINTER_HOPS};
use crate::errors::WireError;

/// Decodes the name starting at `start` in the full message buffer.
///
/// Returns the dotted name and the offset immediately following the name's
/// *original* occurrence: when the name ends in a compression pointer, that
/// is the offset after the 2-byte pointer, not an offset inside the target.
///
/// Termination is guaranteed against hostile input by two checks: every
/// followed pointer must target an offset strictly before the pointer
/// itself, and the total hop count is capped at [`MAX_POINTER_HOPS`].
pub fn decode_name(buf: &[u8], start: usize) -> Result<(String, usize), WireError> {
    let mut name = String::new();
    let mut pos = start;
    // Offset to hand back to the caller, fixed at the first pointer.
    let mut return_offset: Option<usize> = None;
    let mut hops = 0usize;
    // Wire length of the decoded name: one length byte per label plus the
    // terminator, bounded at MAX_NAME_LEN.
    let mut wire_len = 1usize;

    loop {
        let length_byte = *buf.get(pos).ok_or(WireError::UnexpectedEnd {
            offset: pos,
            needed: 1,
        })?;

        if length_byte == 0 {
            pos += 1;
            break;
        }

        if length_byte & 0xC0 == 0xC0 {
            let low = *buf.get(pos + 1).ok_or(WireError::UnexpectedEnd {
                offset: pos + 1,
                needed: 1,
            })?;
            let target = ((length_byte as usize & 0x3F) << 8) | low as usize;
            if return_offset.is_none() {
                return_offset = Some(pos + 2);
            }
            // A pointer that does not jump strictly backwards can never
            // terminate; reject it instead of looping.
            if target >= pos {
                return Err(WireError::BadPointer { at: pos, target });
            }
            hops += 1;
            if hops > MAX_POINTER_HOPS {
                return Err(WireError::PointerLoop {
                    max_hops: MAX_POINTER_HOPS,
                });
            }
            pos = target;
            continue;
        }

        if length_byte & 0xC0 != 0 {
            // 0b01/0b10 extended label types are not in use here.
            return Err(WireError::UnsupportedLabelType {
                offset: pos,
                length_byte,
            });
        }

        let len = length_byte as usize;
        let label_start = pos + 1;
        let label_end = label_start + len;
        if label_end > buf.len() {
            return Err(WireError::UnexpectedEnd {
                offset: label_start,
                needed: label_end - buf.len(),
            });
        }

        wire_len += 1 + len;
        if wire_len > MAX_NAME_LEN {
            return Err(WireError::NameTooLong);
        }

        let label = std::str::from_utf8(&buf[label_start..label_end])
            .map_err(|_| WireError::InvalidLabel { offset: label_start })?;
        if !name.is_empty() {
            name.push('.');
        }
        name.push_str(label);
        pos = label_end;
    }

    Ok((name, return_offset.unwrap_or(pos)))
}

/// Appends the wire form of `name` to `out`: length-prefixed labels followed
/// by a zero byte. No compression pointers are emitted; the decoder must
/// understand them for interoperability, the encoder need not produce them.
pub fn encode_name(name: &str, out: &mut Vec<u8>) -> Result<(), WireError> {
    let start = out.len();

    if !name.is_empty() {
        for label in name.split('.') {
            if label.is_empty() {
                return Err(WireError::EmptyLabel);
            }
            let bytes = label.as_bytes();
            if bytes.len() > MAX_LABEL_LEN {
                return Err(WireError::LabelTooLong(bytes.len()));
            }
            out.push(bytes.len() as u8);
            out.extend_from_slice(bytes);
        }
    }
    out.push(0);

    if out.len() - start > MAX_NAME_LEN {
        return Err(WireError::NameTooLong);
    }
    Ok(())
}
