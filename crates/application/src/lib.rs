//! Cinder DNS Application Layer
pub mod errors;
pub mod ports;
pub mod services;
pub mod use_cases;

pub use errors::ProxyError;
pub use ports::UpstreamExchange;
pub use services::{LocalAnswers, UpstreamOutcome, UpstreamResolver};
pub use use_cases::ProxyQueryUseCase;
