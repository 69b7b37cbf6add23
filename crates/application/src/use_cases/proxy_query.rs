use crate::errors::ProxyError;
use crate::services::{LocalAnswers, UpstreamOutcome, UpstreamResolver};
use cinder_dns_domain::wire::HEADER_LEN;
use cinder_dns_domain::{Flags, Header, Message, ResponseCode};
use tracing::{debug, warn};

/// The proxy pipeline for one inbound datagram: decode, answer locally or
/// resolve upstream, encode the reply.
///
/// Every path yields a deterministic outcome for the serving loop —
/// `Some(reply bytes)` to send back, or `None` to drop the datagram. No
/// input may panic or abort the loop.
pub struct ProxyQueryUseCase {
    resolver: UpstreamResolver,
    local: LocalAnswers,
}

impl ProxyQueryUseCase {
    pub fn new(resolver: UpstreamResolver, local: LocalAnswers) -> Self {
        Self { resolver, local }
    }

    pub async fn handle(&self, datagram: &[u8]) -> Option<Vec<u8>> {
        let request = match Message::from_bytes(datagram) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, len = datagram.len(), "dropping malformed query");
                return error_reply_from_raw(datagram, ResponseCode::FormErr);
            }
        };

        // Responses arriving on the listening socket are not queries.
        if request.header.flags.response {
            debug!(id = request.header.id, "ignoring datagram with QR bit set");
            return None;
        }

        if let Some(reply) = self.local.answer(&request) {
            return encode_reply(reply);
        }

        match self.resolver.query(&request.questions).await {
            Ok(UpstreamOutcome::Answered(upstream)) => {
                // The reply carries the original client's transaction id;
                // the upstream-facing id never leaks back out.
                let mut flags = Flags::reply(request.header.flags, ResponseCode::NoError);
                flags.truncated = upstream.header.flags.truncated;
                let reply = Message {
                    header: Header::new(
                        request.header.id,
                        flags,
                        request.questions.len() as u16,
                        upstream.answers.len() as u16,
                        upstream.authorities.len() as u16,
                        upstream.additionals.len() as u16,
                    ),
                    questions: request.questions,
                    answers: upstream.answers,
                    authorities: upstream.authorities,
                    additionals: upstream.additionals,
                };
                encode_reply(reply)
            }
            Ok(UpstreamOutcome::ErrorResponse(mut raw)) => {
                // Relayed verbatim apart from the transaction id, which is
                // rewritten back to the client's.
                raw[0..2].copy_from_slice(&request.header.id.to_be_bytes());
                Some(raw)
            }
            Err(e) => {
                warn!(error = %e, id = request.header.id, "upstream exchange failed");
                let reply = Message {
                    header: Header::new(
                        request.header.id,
                        Flags::reply(request.header.flags, ResponseCode::ServFail),
                        request.questions.len() as u16,
                        0,
                        0,
                        0,
                    ),
                    questions: request.questions,
                    answers: vec![],
                    authorities: vec![],
                    additionals: vec![],
                };
                encode_reply(reply)
            }
        }
    }
}

fn encode_reply(reply: Message) -> Option<Vec<u8>> {
    match reply.to_bytes() {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            warn!(error = %ProxyError::Wire(e), "failed to encode reply");
            None
        }
    }
}

/// Deterministic behavior for undecodable datagrams: when the fixed header
/// is readable, reply with the given response code under the client's
/// transaction id; otherwise drop.
fn error_reply_from_raw(datagram: &[u8], code: ResponseCode) -> Option<Vec<u8>> {
    if datagram.len() < HEADER_LEN {
        return None;
    }
    let id = u16::from_be_bytes([datagram[0], datagram[1]]);
    let raw_flags = u16::from_be_bytes([datagram[2], datagram[3]]);
    let reply = Message {
        header: Header::new(id, Flags::reply(Flags::from_u16(raw_flags), code), 0, 0, 0, 0),
        questions: vec![],
        answers: vec![],
        authorities: vec![],
        additionals: vec![],
    };
    encode_reply(reply)
}
