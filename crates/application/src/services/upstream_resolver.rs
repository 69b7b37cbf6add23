use crate::errors::ProxyError;
use crate::ports::UpstreamExchange;
use cinder_dns_domain::{Message, Question};
use std::sync::Arc;
use tracing::debug;

/// Result of one upstream query.
#[derive(Debug)]
pub enum UpstreamOutcome {
    /// Upstream answered with RCODE 0.
    Answered(Message),
    /// Upstream replied with a non-zero response code. Not a local
    /// failure: the raw bytes are relayed to the client verbatim.
    ErrorResponse(Vec<u8>),
}

/// Forwards caller-constructed questions to the upstream resolver and
/// decodes the reply.
///
/// Every outgoing query gets a fresh random transaction id. The id is the
/// correlation key between the upstream-facing exchange and its reply, and
/// is independent of the client-facing transaction id: two in-flight
/// upstream queries must never be indistinguishable.
pub struct UpstreamResolver {
    transport: Arc<dyn UpstreamExchange>,
}

impl UpstreamResolver {
    pub fn new(transport: Arc<dyn UpstreamExchange>) -> Self {
        Self { transport }
    }

    pub async fn query(&self, questions: &[Question]) -> Result<UpstreamOutcome, ProxyError> {
        let upstream_id = fastrand::u16(..);
        let query = Message::query(upstream_id, questions.to_vec());
        let query_bytes = query.to_bytes()?;

        debug!(
            upstream_id,
            server = %self.transport.server(),
            "forwarding query upstream"
        );

        let reply_bytes = self.transport.exchange(&query_bytes).await?;
        let reply = Message::from_bytes(&reply_bytes)?;

        if reply.header.flags.response_code.is_error() {
            debug!(
                upstream_id,
                rcode = %reply.header.flags.response_code,
                "upstream returned an error response"
            );
            return Ok(UpstreamOutcome::ErrorResponse(reply_bytes));
        }

        Ok(UpstreamOutcome::Answered(reply))
    }
}
