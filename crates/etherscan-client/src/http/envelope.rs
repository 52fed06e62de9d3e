use serde_json::Value;

use crate::error::EtherscanError;

/// Messages the service pairs with `status: "0"` when a list query simply
/// matched nothing. These are empty results, not failures.
const EMPTY_RESULT_MESSAGES: [&str; 2] = ["No transactions found", "No records found"];

/// Bytes of an unparseable body quoted in a decode error. The full body is
/// only emitted at `trace` level by the client.
const MAX_BODY_EXCERPT: usize = 512;

#[derive(serde::Deserialize)]
struct ClassicEnvelope {
    status: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    result: Value,
}

#[derive(serde::Deserialize)]
struct JsonRpcEnvelope {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
}

/// Interpret a response body and return its `result` payload.
///
/// Two envelope shapes are served: `{status, message, result}` for most
/// modules, and JSON-RPC `{jsonrpc, id, result | error}` for `proxy`.
pub(crate) fn parse_envelope(body: &str) -> Result<Value, EtherscanError> {
    let decoded: Value = serde_json::from_str(body)
        .map_err(|e| {
            EtherscanError::Decode(format!(
                "response is not JSON: {e}; body={}",
                body_excerpt(body)
            ))
        })?;

    let Value::Object(ref fields) = decoded else {
        return Err(EtherscanError::Decode(format!(
            "response is not a JSON object; body={}",
            body_excerpt(body)
        )));
    };

    if fields.contains_key("status") {
        let envelope: ClassicEnvelope = serde_json::from_value(decoded)
            .map_err(|e| EtherscanError::Decode(format!("invalid response envelope: {e}")))?;
        return classic_result(envelope);
    }

    if fields.contains_key("result") || fields.contains_key("error") {
        let envelope: JsonRpcEnvelope = serde_json::from_value(decoded)
            .map_err(|e| EtherscanError::Decode(format!("invalid JSON-RPC envelope: {e}")))?;
        if let Some(err) = envelope.error {
            return Err(parse_jsonrpc_error(err));
        }
        return Ok(envelope.result.unwrap_or(Value::Null));
    }

    Err(EtherscanError::Decode(format!(
        "response has no recognizable envelope; body={}",
        body_excerpt(body)
    )))
}

fn body_excerpt(body: &str) -> String {
    if body.len() <= MAX_BODY_EXCERPT {
        return body.to_owned();
    }
    let mut end = MAX_BODY_EXCERPT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... ({} bytes total)", &body[..end], body.len())
}

fn classic_result(envelope: ClassicEnvelope) -> Result<Value, EtherscanError> {
    if envelope.status == "1" {
        return Ok(envelope.result);
    }

    if envelope.result.is_array()
        && EMPTY_RESULT_MESSAGES
            .iter()
            .any(|prefix| envelope.message.starts_with(prefix))
    {
        return Ok(envelope.result);
    }

    // The service puts the human-readable reason in `result` and a terse
    // "NOTOK" in `message`; prefer the former when present.
    let message = match envelope.result {
        Value::String(detail) if !detail.is_empty() => detail,
        _ if !envelope.message.is_empty() => envelope.message,
        _ => format!("request failed with status `{}`", envelope.status),
    };
    Err(EtherscanError::Api { message })
}

fn parse_jsonrpc_error(err: Value) -> EtherscanError {
    #[derive(serde::Deserialize)]
    struct JsonRpcError {
        message: String,
    }

    match serde_json::from_value::<JsonRpcError>(err.clone()) {
        Ok(parsed) => EtherscanError::Api {
            message: parsed.message,
        },
        Err(_) => EtherscanError::Api {
            message: err.to_string(),
        },
    }
}
