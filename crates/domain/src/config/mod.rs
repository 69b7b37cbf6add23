mod errors;
mod local_records;
mod logging;
mod root;
mod server;
mod upstream;

pub use errors::ConfigError;
pub use local_records::LocalRecord;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
