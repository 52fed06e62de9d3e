use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::config::ClientConfig;
use crate::error::EtherscanError;
use crate::http::{parse_envelope, HttpRequest, ReqwestTransport, Transport};
use crate::request::RequestDescriptor;

// ==============================================================================
// EtherscanClient
// ==============================================================================

/// Etherscan REST client.
///
/// Holds only immutable configuration and a shareable transport, so one
/// instance can serve concurrent callers (wrap it in an `Arc` to share it
/// across tasks). Every invocation is a single independent round trip: no
/// retries, no caching, no rate-limit bookkeeping.
#[derive(Clone)]
pub struct EtherscanClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl EtherscanClient {
    /// Create a client backed by a `reqwest` transport built from `config`.
    pub fn new(config: ClientConfig) -> Result<Self, EtherscanError> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Shorthand for a mainnet client with default timeouts.
    pub fn from_api_key(api_key: impl Into<String>) -> Result<Self, EtherscanError> {
        Self::new(ClientConfig::new(api_key)?)
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET `module`/`action` with `params` and return the raw `result` payload.
    pub async fn invoke<I, K, V>(
        &self,
        module: &str,
        action: &str,
        params: I,
    ) -> Result<Value, EtherscanError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: std::fmt::Display,
    {
        self.execute(RequestDescriptor::new(module, action).params(params))
            .await
    }

    /// Like [`Self::invoke`] but sends the parameters as a POST form body.
    pub async fn invoke_post<I, K, V>(
        &self,
        module: &str,
        action: &str,
        params: I,
    ) -> Result<Value, EtherscanError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: std::fmt::Display,
    {
        self.execute(RequestDescriptor::new(module, action).post().params(params))
            .await
    }

    /// Invoke and deserialize `result` into the caller's expected shape.
    pub async fn invoke_as<T, I, K, V>(
        &self,
        module: &str,
        action: &str,
        params: I,
    ) -> Result<T, EtherscanError>
    where
        T: DeserializeOwned,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: std::fmt::Display,
    {
        let raw = self.invoke(module, action, params).await?;
        decode_result(raw, module, action)
    }

    /// Send a prepared descriptor and return the raw `result` payload.
    pub async fn execute(&self, request: RequestDescriptor) -> Result<Value, EtherscanError> {
        let params = request.wire_params(self.config.api_key().expose())?;
        debug!(
            api.module = request.module(),
            api.action = request.action(),
            api.method = ?request.method(),
            api.params = request.param_count(),
            "etherscan call"
        );

        let response = self
            .transport
            .send(HttpRequest {
                method: request.method(),
                url: self.config.base_url().clone(),
                params,
            })
            .await
            .inspect_err(|err| {
                warn!(
                    api.module = request.module(),
                    api.action = request.action(),
                    error = %err,
                    "etherscan transport failure"
                );
            })?;

        debug!(
            api.module = request.module(),
            api.action = request.action(),
            status = response.status,
            body_len = response.body.len(),
            "etherscan response"
        );
        trace!(
            api.module = request.module(),
            api.action = request.action(),
            body = %response.body,
            "etherscan response body"
        );

        if !(200..300).contains(&response.status) {
            warn!(
                api.module = request.module(),
                api.action = request.action(),
                status = response.status,
                "etherscan HTTP error"
            );
            return Err(EtherscanError::Http {
                status: response.status,
                body: response.body,
            });
        }

        parse_envelope(&response.body).inspect_err(|err| {
            if err.is_api() {
                warn!(
                    api.module = request.module(),
                    api.action = request.action(),
                    error = %err,
                    "etherscan reported failure"
                );
            }
        })
    }

    /// Execute a descriptor and deserialize `result` into `T`.
    pub(crate) async fn execute_as<T: DeserializeOwned>(
        &self,
        request: RequestDescriptor,
    ) -> Result<T, EtherscanError> {
        let module = request.module().to_owned();
        let action = request.action().to_owned();
        let raw = self.execute(request).await?;
        decode_result(raw, &module, &action)
    }
}

impl std::fmt::Debug for EtherscanClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EtherscanClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn decode_result<T: DeserializeOwned>(
    raw: Value,
    module: &str,
    action: &str,
) -> Result<T, EtherscanError> {
    serde_json::from_value(raw).map_err(|e| {
        EtherscanError::Decode(format!("unexpected `{module}/{action}` result shape: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;
    use crate::http::mock::{MockReply, MockTransport};
    use crate::request::Method;
    use crate::test_util::*;

    const GAS_ORACLE_BODY: &str = r#"{"status":"1","message":"OK","result":{"SafeGasPrice":"10","ProposeGasPrice":"12","FastGasPrice":"15"}}"#;

    #[tokio::test]
    async fn gas_oracle_result_is_returned_exactly() {
        let mock = Arc::new(
            MockTransport::builder()
                .with_reply("gastracker", "gasoracle", MockReply::ok(GAS_ORACLE_BODY))
                .build(),
        );
        let client = client_with(mock.clone());

        let result = client
            .invoke("gastracker", "gasoracle", no_params())
            .await
            .expect("gas oracle must succeed");

        let expected: BTreeMap<String, String> = BTreeMap::from([
            ("SafeGasPrice".to_owned(), "10".to_owned()),
            ("ProposeGasPrice".to_owned(), "12".to_owned()),
            ("FastGasPrice".to_owned(), "15".to_owned()),
        ]);
        let decoded: BTreeMap<String, String> =
            serde_json::from_value(result).expect("result must be a string map");
        assert_eq!(decoded, expected);
    }

    #[tokio::test]
    async fn request_carries_module_action_params_and_exactly_one_key() {
        let mock = Arc::new(
            MockTransport::builder()
                .with_reply("account", "balance", MockReply::ok(ok_envelope(json!("42"))))
                .build(),
        );
        let client = client_with(mock.clone());

        client
            .invoke("account", "balance", [("address", "0xabc"), ("tag", "latest")])
            .await
            .expect("balance must succeed");

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url.as_str(), TEST_BASE_URL);
        assert_eq!(request.param("module"), Some("account"));
        assert_eq!(request.param("action"), Some("balance"));
        assert_eq!(request.param("address"), Some("0xabc"));
        assert_eq!(request.param("tag"), Some("latest"));
        let keys: Vec<_> = request.params.iter().filter(|(k, _)| k == "apikey").collect();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].1, TEST_API_KEY);
    }

    #[tokio::test]
    async fn http_500_is_an_http_error() {
        let mock = Arc::new(
            MockTransport::builder()
                .with_reply("stats", "ethprice", MockReply::status(500, "Internal Server Error"))
                .build(),
        );
        let client = client_with(mock);

        let err = client
            .invoke("stats", "ethprice", no_params())
            .await
            .expect_err("500 must fail");
        assert!(matches!(
            err,
            EtherscanError::Http { status: 500, ref body } if body == "Internal Server Error"
        ));
    }

    #[tokio::test]
    async fn api_error_surfaces_service_message_despite_http_200() {
        let mock = Arc::new(
            MockTransport::builder()
                .with_reply(
                    "account",
                    "balance",
                    MockReply::ok(r#"{"status":"0","message":"NOTOK","result":"rate limit exceeded"}"#),
                )
                .build(),
        );
        let client = client_with(mock);

        let err = client
            .invoke("account", "balance", [("address", "0xabc")])
            .await
            .expect_err("status 0 must fail");
        assert!(matches!(err, EtherscanError::Api { ref message } if message == "rate limit exceeded"));
    }

    #[tokio::test]
    async fn non_json_body_is_a_decode_error() {
        let mock = Arc::new(
            MockTransport::builder()
                .with_reply("stats", "ethsupply", MockReply::ok("<html>maintenance</html>"))
                .build(),
        );
        let client = client_with(mock);

        let err = client
            .invoke("stats", "ethsupply", no_params())
            .await
            .expect_err("html must fail");
        assert!(matches!(err, EtherscanError::Decode(_)));
    }

    #[tokio::test]
    async fn transport_failure_is_reported_as_is() {
        let mock = Arc::new(
            MockTransport::builder()
                .with_reply(
                    "stats",
                    "ethsupply",
                    MockReply::TransportFailure("connection refused".to_owned()),
                )
                .build(),
        );
        let client = client_with(mock.clone());

        let err = client
            .invoke("stats", "ethsupply", no_params())
            .await
            .expect_err("transport failure must propagate");
        assert!(err.is_transport());
        assert_eq!(mock.request_count(), 1, "failures are never retried");
    }

    #[tokio::test]
    async fn invalid_params_fail_before_any_network_call() {
        let mock = Arc::new(MockTransport::builder().build());
        let client = client_with(mock.clone());

        let err = client
            .invoke("account", "balance", [("apikey", "smuggled")])
            .await
            .expect_err("apikey override must fail");
        assert!(matches!(err, EtherscanError::InvalidArgument(_)));
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn invoke_post_sends_form_method() {
        let mock = Arc::new(
            MockTransport::builder()
                .with_reply(
                    "contract",
                    "verifysourcecode",
                    MockReply::ok(ok_envelope(json!("guid-123"))),
                )
                .build(),
        );
        let client = client_with(mock.clone());

        let guid = client
            .invoke_post("contract", "verifysourcecode", [("sourceCode", "contract A {}")])
            .await
            .expect("post must succeed");
        assert_eq!(guid, json!("guid-123"));
        assert_eq!(mock.requests()[0].method, Method::Post);
    }

    #[tokio::test]
    async fn invoke_as_reports_shape_mismatch_as_decode_error() {
        let mock = Arc::new(
            MockTransport::builder()
                .with_reply("stats", "ethsupply", MockReply::ok(ok_envelope(json!("1000"))))
                .build(),
        );
        let client = client_with(mock);

        let supply: String = client
            .invoke_as("stats", "ethsupply", no_params())
            .await
            .expect("string result must decode");
        assert_eq!(supply, "1000");

        let err = client
            .invoke_as::<Vec<u64>, _, _, _>("stats", "ethsupply", no_params())
            .await
            .expect_err("string is not a list");
        assert!(matches!(err, EtherscanError::Decode(message) if message.contains("stats/ethsupply")));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_invocations_receive_their_own_results() {
        let mock = Arc::new(
            MockTransport::builder()
                .with_handler(|request| {
                    let address = request.param("address").unwrap_or_default();
                    MockReply::ok(ok_envelope(json!(format!("balance-of-{address}"))))
                })
                .build(),
        );
        let client = Arc::new(client_with(mock.clone()));

        let calls = (0..16).map(|i| {
            let client = Arc::clone(&client);
            tokio::spawn(async move {
                let address = format!("0x{i:040x}");
                let result = client
                    .invoke("account", "balance", [("address", address.as_str())])
                    .await
                    .expect("balance must succeed");
                (address, result)
            })
        });

        for joined in futures::future::join_all(calls).await {
            let (address, result) = joined.expect("task must not panic");
            assert_eq!(result, json!(format!("balance-of-{address}")));
        }
        assert_eq!(mock.request_count(), 16);
    }

    #[test]
    fn construction_with_empty_key_fails_before_network() {
        let err = EtherscanClient::from_api_key("").expect_err("empty key must fail");
        assert!(matches!(err, EtherscanError::Configuration(_)));
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let client = client_with(Arc::new(MockTransport::builder().build()));
        assert!(!format!("{client:?}").contains(TEST_API_KEY));
    }

    #[tokio::test]
    async fn failure_errors_never_render_the_api_key() {
        init_tracing();
        let mock = Arc::new(
            MockTransport::builder()
                .with_reply(
                    "stats",
                    "ethsupply",
                    MockReply::TransportFailure("connection refused".to_owned()),
                )
                .with_reply("stats", "ethprice", MockReply::status(503, "unavailable"))
                .with_reply("stats", "nodecount", MockReply::ok("<html>down</html>"))
                .with_reply(
                    "stats",
                    "chainsize",
                    MockReply::ok(r#"{"status":"0","message":"NOTOK","result":"Max rate limit reached"}"#),
                )
                .build(),
        );
        let client = client_with(mock.clone());

        for action in ["ethsupply", "ethprice", "nodecount", "chainsize"] {
            let err = client
                .invoke("stats", action, no_params())
                .await
                .expect_err("every canned reply is a failure");
            assert!(!err.to_string().contains(TEST_API_KEY), "{action}: {err}");
            assert!(!format!("{err:?}").contains(TEST_API_KEY), "{action}: {err:?}");
        }
        assert!(mock
            .requests()
            .iter()
            .all(|request| request.param("apikey") == Some(TEST_API_KEY)));
    }
}
