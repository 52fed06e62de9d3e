//! Per-call request descriptor: module, action, method and parameters.

use std::fmt::Display;

use crate::error::EtherscanError;

/// Parameter names owned by the client. Callers may not set them.
const RESERVED_PARAMS: [&str; 3] = ["module", "action", "apikey"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One logical call against the service. Built fresh per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    module: String,
    action: String,
    method: Method,
    params: Vec<(String, String)>,
}

impl RequestDescriptor {
    pub fn new(module: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            action: action.into(),
            method: Method::Get,
            params: Vec::new(),
        }
    }

    pub fn post(mut self) -> Self {
        self.method = Method::Post;
        self
    }

    /// Add a parameter, serialized through `Display`.
    pub fn param(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.params.push((name.into(), value.to_string()));
        self
    }

    /// Add a parameter only when it is set; `None` is omitted entirely.
    pub fn opt_param<V: Display>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(name, value),
            None => self,
        }
    }

    pub fn params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Display,
    {
        for (name, value) in params {
            self = self.param(name, value);
        }
        self
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Full parameter list sent on the wire: module and action first, then
    /// caller parameters in insertion order, then the API key.
    pub(crate) fn wire_params(&self, api_key: &str) -> Result<Vec<(String, String)>, EtherscanError> {
        if self.module.is_empty() || self.action.is_empty() {
            return Err(EtherscanError::InvalidArgument(
                "module and action must not be empty".to_owned(),
            ));
        }

        let mut wire = Vec::with_capacity(self.params.len() + 3);
        wire.push(("module".to_owned(), self.module.clone()));
        wire.push(("action".to_owned(), self.action.clone()));
        for (name, value) in &self.params {
            if RESERVED_PARAMS.contains(&name.as_str()) {
                return Err(EtherscanError::InvalidArgument(format!(
                    "parameter `{name}` is set by the client and cannot be overridden"
                )));
            }
            if wire.iter().any(|(existing, _)| existing == name) {
                return Err(EtherscanError::InvalidArgument(format!(
                    "parameter `{name}` given more than once"
                )));
            }
            wire.push((name.clone(), value.clone()));
        }
        wire.push(("apikey".to_owned(), api_key.to_owned()));
        Ok(wire)
    }
}
