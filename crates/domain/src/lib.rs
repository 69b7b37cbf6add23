//! Cinder DNS Domain Layer
pub mod config;
pub mod errors;
pub mod message;
pub mod records;
pub mod wire;

pub use config::Config;
pub use errors::WireError;
pub use message::{Flags, Header, Message, Question, ResourceRecord};
pub use records::{Opcode, RecordClass, RecordType, ResponseCode};
