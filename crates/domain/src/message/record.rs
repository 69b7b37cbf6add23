use crate::records::{RecordClass, RecordType};

/// A resource record with opaque RDATA. Payload contents are never
/// interpreted here; records from an upstream reply are carried through
/// to the client byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,
    pub record_type: RecordType,
    pub class: RecordClass,
    /// Time to live in seconds.
    pub ttl: u32,
    /// Declared RDATA length. Must equal `data.len()` when encoding;
    /// a mismatch is malformed, not something to silently truncate.
    pub data_len: u16,
    pub data: Vec<u8>,
}

impl ResourceRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        class: RecordClass,
        ttl: u32,
        data: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            class,
            ttl,
            data_len: data.len() as u16,
            data,
        }
    }
}
