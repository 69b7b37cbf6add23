mod proxy_query;

pub use proxy_query::ProxyQueryUseCase;
