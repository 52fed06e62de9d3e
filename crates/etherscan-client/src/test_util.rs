//! Shared test helpers for `etherscan-client` unit tests.

use std::sync::{Arc, Once};

use serde_json::Value;

use crate::client::EtherscanClient;
use crate::config::ClientConfig;
use crate::http::mock::MockTransport;

pub const TEST_API_KEY: &str = "TESTKEY123";
pub const TEST_BASE_URL: &str = "http://etherscan.test/api";

static TRACING_INIT: Once = Once::new();

pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("etherscan_client=debug")),
            )
            .with_test_writer()
            .try_init();
    });
}

pub fn test_config() -> ClientConfig {
    ClientConfig::builder(TEST_API_KEY)
        .base_url(TEST_BASE_URL)
        .build()
        .expect("test config must build")
}

pub fn client_with(mock: Arc<MockTransport>) -> EtherscanClient {
    init_tracing();
    EtherscanClient::with_transport(test_config(), mock)
}

pub fn no_params() -> std::iter::Empty<(&'static str, &'static str)> {
    std::iter::empty()
}

/// Serialize a `status: "1"` envelope around `result`.
pub fn ok_envelope(result: Value) -> String {
    serde_json::json!({ "status": "1", "message": "OK", "result": result }).to_string()
}

/// Serialize a JSON-RPC envelope around `result`, as the `proxy` module does.
pub fn rpc_envelope(result: Value) -> String {
    serde_json::json!({ "jsonrpc": "2.0", "id": 1, "result": result }).to_string()
}

pub const ADDRESS_1: &str = "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae";
pub const ADDRESS_2: &str = "0xddbd2b932c763ba5b1b7ae3b362eac3e8d40121a";
pub const TX_HASH_1: &str = "0x15f8e5ea1079d9a0bb04a4c58ae5fe7654b5b2b4463375ff7ffb490aa0032f3a";
