mod error;
mod fetch;
mod query_client;
mod transport;

#[cfg(test)]
pub(crate) mod test_support;

pub use {
    error::FetchError,
    fetch::{FetchHandle, FetchState, use_fetch_data},
    query_client::QueryClient,
    transport::{ReqwestTransport, Transport},
};
