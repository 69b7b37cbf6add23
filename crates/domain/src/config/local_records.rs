use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// A statically configured address record, answered authoritatively
/// without an upstream exchange. The record type follows the address
/// family: IPv4 answers A queries, IPv6 answers AAAA queries.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocalRecord {
    pub name: String,

    pub address: IpAddr,

    #[serde(default)]
    pub ttl: Option<u32>,
}

impl LocalRecord {
    pub fn ttl_or_default(&self) -> u32 {
        self.ttl.unwrap_or(300)
    }

    pub fn matches_name(&self, query_name: &str) -> bool {
        self.name.eq_ignore_ascii_case(query_name)
    }
}
