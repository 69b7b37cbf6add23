use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Address of the upstream recursive resolver, `IP:PORT`.
    #[serde(default = "default_address")]
    pub address: String,

    /// How long one upstream exchange may take before it fails with a
    /// timeout error, in milliseconds.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            query_timeout_ms: default_query_timeout_ms(),
        }
    }
}

fn default_address() -> String {
    "8.8.8.8:53".to_string()
}

fn default_query_timeout_ms() -> u64 {
    2000
}
