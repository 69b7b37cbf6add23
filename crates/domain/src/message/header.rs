use crate::records::{Opcode, ResponseCode};

/// The flags word, bit-unpacked. Layout (MSB to LSB):
/// QR(1) OPCODE(4) AA(1) TC(1) RD(1) RA(1) Z(3, unused) RCODE(4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    pub response: bool,
    pub opcode: Opcode,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub response_code: ResponseCode,
}

impl Flags {
    /// Flags for an outgoing recursive query.
    pub fn query() -> Self {
        Self {
            response: false,
            opcode: Opcode::Query,
            authoritative: false,
            truncated: false,
            recursion_desired: true,
            recursion_available: false,
            response_code: ResponseCode::NoError,
        }
    }

    /// Flags for a reply from this server.
    pub fn reply(request: Flags, response_code: ResponseCode) -> Self {
        Self {
            response: true,
            opcode: request.opcode,
            authoritative: false,
            truncated: false,
            recursion_desired: request.recursion_desired,
            recursion_available: true,
            response_code,
        }
    }

    pub fn from_u16(raw: u16) -> Self {
        Self {
            response: raw & 0x8000 != 0,
            opcode: Opcode::from_u8(((raw & 0x7800) >> 11) as u8),
            authoritative: raw & 0x0400 != 0,
            truncated: raw & 0x0200 != 0,
            recursion_desired: raw & 0x0100 != 0,
            recursion_available: raw & 0x0080 != 0,
            response_code: ResponseCode::from_u8((raw & 0x000F) as u8),
        }
    }

    /// Exact inverse of `from_u16`.
    pub fn to_u16(self) -> u16 {
        let mut raw = 0u16;
        if self.response {
            raw |= 0x8000;
        }
        raw |= (self.opcode.to_u8() as u16) << 11;
        if self.authoritative {
            raw |= 0x0400;
        }
        if self.truncated {
            raw |= 0x0200;
        }
        if self.recursion_desired {
            raw |= 0x0100;
        }
        if self.recursion_available {
            raw |= 0x0080;
        }
        raw | self.response_code.to_u8() as u16
    }
}

/// The fixed 12-byte message header.
///
/// The stored counts reflect what was decoded; on encode they are
/// resynchronized to the actual section lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub flags: Flags,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    pub fn new(
        id: u16,
        flags: Flags,
        question_count: u16,
        answer_count: u16,
        authority_count: u16,
        additional_count: u16,
    ) -> Self {
        Self {
            id,
            flags,
            question_count,
            answer_count,
            authority_count,
            additional_count,
        }
    }
}
