pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod request;
pub mod types;

#[cfg(test)]
mod test_util;

pub use api::TxListQuery;
pub use client::EtherscanClient;
pub use config::{ClientConfig, Network};
pub use error::EtherscanError;
pub use request::{Method, RequestDescriptor};
