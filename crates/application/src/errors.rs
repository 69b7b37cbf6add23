use cinder_dns_domain::WireError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("malformed message: {0}")]
    Wire(#[from] WireError),

    #[error("upstream {server} did not answer within {timeout_ms} ms")]
    UpstreamTimeout { server: String, timeout_ms: u64 },

    #[error("upstream {server} unreachable: {reason}")]
    UpstreamUnreachable { server: String, reason: String },
}
