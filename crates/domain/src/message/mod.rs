mod header;
mod question;
mod record;

pub use header::{Flags, Header};
pub use question::Question;
pub use record::ResourceRecord;

use crate::errors::WireError;
use crate::wire;

/// A complete DNS message. Immutable once constructed: the proxy builds a
/// fresh `Message` for every reply instead of mutating the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Message {
    /// Decode one datagram into a structured message.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, WireError> {
        wire::decode_message(buf)
    }

    /// Encode back to wire bytes. Section counts in the emitted header are
    /// recomputed from the actual section lengths.
    pub fn to_bytes(&self) -> Result<Vec<u8>, WireError> {
        wire::encode_message(self)
    }

    /// A recursive query carrying the given questions and no records.
    pub fn query(id: u16, questions: Vec<Question>) -> Self {
        Self {
            header: Header::new(id, Flags::query(), questions.len() as u16, 0, 0, 0),
            questions,
            answers: vec![],
            authorities: vec![],
            additionals: vec![],
        }
    }
}
