use super::name::encode_name;
use crate::errors::WireError;
use crate::message::{Message, Question, ResourceRecord};

/// Serializes a [`Message`] to wire bytes.
///
/// The four section counts in the emitted header always come from the
/// actual section lengths, not from the stored header fields: emitting a
/// count that disagrees with the section it describes produces a message
/// no compliant client can parse.
pub fn encode_message(message: &Message) -> Result<Vec<u8>, WireError> {
    let mut out = Vec::with_capacity(512);

    put_u16(&mut out, message.header.id);
    put_u16(&mut out, message.header.flags.to_u16());
    put_u16(&mut out, message.questions.len() as u16);
    put_u16(&mut out, message.answers.len() as u16);
    put_u16(&mut out, message.authorities.len() as u16);
    put_u16(&mut out, message.additionals.len() as u16);

    for question in &message.questions {
        encode_question(question, &mut out)?;
    }
    for record in message
        .answers
        .iter()
        .chain(&message.authorities)
        .chain(&message.additionals)
    {
        encode_record(record, &mut out)?;
    }

    Ok(out)
}

fn encode_question(question: &Question, out: &mut Vec<u8>) -> Result<(), WireError> {
    encode_name(&question.name, out)?;
    put_u16(out, question.record_type.to_u16());
    put_u16(out, question.class.to_u16());
    Ok(())
}

fn encode_record(record: &ResourceRecord, out: &mut Vec<u8>) -> Result<(), WireError> {
    if record.data_len as usize != record.data.len() {
        return Err(WireError::RdataLengthMismatch {
            declared: record.data_len as usize,
            actual: record.data.len(),
        });
    }
    encode_name(&record.name, out)?;
    put_u16(out, record.record_type.to_u16());
    put_u16(out, record.class.to_u16());
    put_u32(out, record.ttl);
    put_u16(out, record.data_len);
    out.extend_from_slice(&record.data);
    Ok(())
}

fn put_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn put_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_be_bytes());
}
