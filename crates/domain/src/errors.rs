use thiserror::Error;

/// Malformed wire data. Always local to the message being decoded or
/// encoded, never fatal to the serving process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("message truncated: needed {needed} more bytes at offset {offset}")]
    UnexpectedEnd { offset: usize, needed: usize },

    #[error("label of {0} bytes exceeds the 63-byte limit")]
    LabelTooLong(usize),

    #[error("empty label inside a name")]
    EmptyLabel,

    #[error("name exceeds the 255-byte wire limit")]
    NameTooLong,

    #[error("label at offset {offset} is not valid UTF-8")]
    InvalidLabel { offset: usize },

    #[error("unsupported label type {length_byte:#04x} at offset {offset}")]
    UnsupportedLabelType { offset: usize, length_byte: u8 },

    #[error("compression pointer at offset {at} targets offset {target}, which does not precede it")]
    BadPointer { at: usize, target: usize },

    #[error("compression pointer chain exceeded {max_hops} hops")]
    PointerLoop { max_hops: usize },

    #[error("record declares {declared} RDATA bytes but carries {actual}")]
    RdataLengthMismatch { declared: usize, actual: usize },
}
