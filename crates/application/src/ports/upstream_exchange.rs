use crate::errors::ProxyError;
use async_trait::async_trait;

/// Transport boundary towards the configured upstream resolver.
///
/// One logical request/response exchange per call; the implementation owns
/// the session for the duration of the call and releases it on every exit
/// path. Replies whose transaction id does not match the query's id must
/// be discarded by the implementation.
#[async_trait]
pub trait UpstreamExchange: Send + Sync {
    /// Send the encoded query and return the raw reply bytes.
    async fn exchange(&self, query: &[u8]) -> Result<Vec<u8>, ProxyError>;

    /// Address of the upstream this exchange talks to, for diagnostics.
    fn server(&self) -> String;
}
