//! Cinder DNS Infrastructure Layer
//!
//! Socket-facing adapters: the UDP serving loop and the UDP transport
//! behind the application layer's upstream port.

pub mod server;
pub mod upstream;

pub use server::UdpServer;
pub use upstream::UdpUpstream;
