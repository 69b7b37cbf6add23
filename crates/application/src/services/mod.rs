mod local_answers;
mod upstream_resolver;

pub use local_answers::LocalAnswers;
pub use upstream_resolver::{UpstreamOutcome, UpstreamResolver};
