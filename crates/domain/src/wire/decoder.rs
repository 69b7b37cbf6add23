use super::name::decode_name;
use super::HEADER_LEN;
use crate::errors::WireError;
use crate::message::{Flags, Header, Message, Question, ResourceRecord};
use crate::records::{RecordClass, RecordType};
use tracing::trace;

/// Bounds-checked cursor over the full message buffer. Name reads go
/// through [`decode_name`] so compression pointers can reference any
/// earlier part of the message.
struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        let end = self.pos + len;
        if end > self.buf.len() {
            return Err(WireError::UnexpectedEnd {
                offset: self.pos,
                needed: end - self.buf.len(),
            });
        }
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn read_u16(&mut self) -> Result<u16, WireError> {
        let bytes = self.take(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    fn read_u32(&mut self) -> Result<u32, WireError> {
        let bytes = self.take(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_name(&mut self) -> Result<String, WireError> {
        let (name, next) = decode_name(self.buf, self.pos)?;
        self.pos = next;
        Ok(name)
    }
}

/// Decodes one datagram into a [`Message`]. Section parsing is bounded by
/// both the header counts and the buffer length; any read past the end is
/// a fatal [`WireError`], never a silent out-of-bounds access.
pub fn decode_message(buf: &[u8]) -> Result<Message, WireError> {
    if buf.len() < HEADER_LEN {
        return Err(WireError::UnexpectedEnd {
            offset: buf.len(),
            needed: HEADER_LEN - buf.len(),
        });
    }

    let mut reader = Reader::new(buf);

    let id = reader.read_u16()?;
    let flags = Flags::from_u16(reader.read_u16()?);
    let question_count = reader.read_u16()?;
    let answer_count = reader.read_u16()?;
    let authority_count = reader.read_u16()?;
    let additional_count = reader.read_u16()?;

    let header = Header::new(
        id,
        flags,
        question_count,
        answer_count,
        authority_count,
        additional_count,
    );

    let mut questions = Vec::with_capacity(question_count as usize);
    for _ in 0..question_count {
        questions.push(decode_question(&mut reader)?);
    }

    let answers = decode_records(&mut reader, answer_count)?;
    let authorities = decode_records(&mut reader, authority_count)?;
    let additionals = decode_records(&mut reader, additional_count)?;

    trace!(
        id,
        questions = questions.len(),
        answers = answers.len(),
        "message decoded"
    );

    Ok(Message {
        header,
        questions,
        answers,
        authorities,
        additionals,
    })
}

fn decode_question(reader: &mut Reader<'_>) -> Result<Question, WireError> {
    let name = reader.read_name()?;
    let record_type = RecordType::from_u16(reader.read_u16()?);
    let class = RecordClass::from_u16(reader.read_u16()?);
    Ok(Question::new(name, record_type, class))
}

fn decode_records(reader: &mut Reader<'_>, count: u16) -> Result<Vec<ResourceRecord>, WireError> {
    let mut records = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let name = reader.read_name()?;
        let record_type = RecordType::from_u16(reader.read_u16()?);
        let class = RecordClass::from_u16(reader.read_u16()?);
        let ttl = reader.read_u32()?;
        let data_len = reader.read_u16()?;
        let data = reader.take(data_len as usize)?.to_vec();
        records.push(ResourceRecord {
            name,
            record_type,
            class,
            ttl,
            data_len,
            data,
        });
    }
    Ok(records)
}
