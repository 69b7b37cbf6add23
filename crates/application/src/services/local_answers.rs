use cinder_dns_domain::config::LocalRecord;
use cinder_dns_domain::{
    Flags, Header, Message, RecordClass, RecordType, ResourceRecord, ResponseCode,
};
use std::net::IpAddr;
use tracing::debug;

/// Authoritative answers for statically configured records.
///
/// IPv4 records answer A queries, IPv6 records answer AAAA queries; the
/// name match is case-insensitive. Anything else goes upstream.
pub struct LocalAnswers {
    records: Vec<LocalRecord>,
}

impl LocalAnswers {
    pub fn new(records: Vec<LocalRecord>) -> Self {
        Self { records }
    }

    /// Builds an authoritative reply if the request is answerable locally.
    pub fn answer(&self, request: &Message) -> Option<Message> {
        if request.questions.len() != 1 {
            return None;
        }
        let question = &request.questions[0];
        if question.class != RecordClass::In {
            return None;
        }

        let answers: Vec<ResourceRecord> = self
            .records
            .iter()
            .filter(|record| record.matches_name(&question.name))
            .filter_map(|record| match (question.record_type, record.address) {
                (RecordType::A, IpAddr::V4(v4)) => Some(ResourceRecord::new(
                    question.name.clone(),
                    RecordType::A,
                    RecordClass::In,
                    record.ttl_or_default(),
                    v4.octets().to_vec(),
                )),
                (RecordType::AAAA, IpAddr::V6(v6)) => Some(ResourceRecord::new(
                    question.name.clone(),
                    RecordType::AAAA,
                    RecordClass::In,
                    record.ttl_or_default(),
                    v6.octets().to_vec(),
                )),
                _ => None,
            })
            .collect();

        if answers.is_empty() {
            return None;
        }

        debug!(name = %question.name, answers = answers.len(), "answering from local records");

        let mut flags = Flags::reply(request.header.flags, ResponseCode::NoError);
        flags.authoritative = true;

        Some(Message {
            header: Header::new(request.header.id, flags, 1, answers.len() as u16, 0, 0),
            questions: request.questions.clone(),
            answers,
            authorities: vec![],
            additionals: vec![],
        })
    }
}
