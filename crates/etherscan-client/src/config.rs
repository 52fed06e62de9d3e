//! Client configuration: API key, target network / base URL, and timeouts.
//!
//! A [`ClientConfig`] is immutable once built and owned by the client that
//! consumes it. There is no process-wide default key or session.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};

use crate::error::EtherscanError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub const ENV_API_KEY: &str = "ETHERSCAN_API_KEY";
pub const ENV_BASE_URL: &str = "ETHERSCAN_BASE_URL";
pub const ENV_NETWORK: &str = "ETHERSCAN_NETWORK";
pub const ENV_TIMEOUT_SECS: &str = "ETHERSCAN_TIMEOUT_SECS";

// ==============================================================================
// Network
// ==============================================================================

/// Ethereum networks served by Etherscan, each with its own API host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    #[default]
    Mainnet,
    Sepolia,
    Holesky,
}

impl Network {
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Mainnet => "https://api.etherscan.io/api",
            Self::Sepolia => "https://api-sepolia.etherscan.io/api",
            Self::Holesky => "https://api-holesky.etherscan.io/api",
        }
    }
}

impl FromStr for Network {
    type Err = EtherscanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(Self::Mainnet),
            "sepolia" => Ok(Self::Sepolia),
            "holesky" => Ok(Self::Holesky),
            other => Err(EtherscanError::Configuration(format!(
                "unknown network `{other}`; expected mainnet, sepolia or holesky"
            ))),
        }
    }
}

// ==============================================================================
// API Key
// ==============================================================================

/// Opaque Etherscan API key. `Debug` never prints the secret.
#[derive(Clone)]
pub struct ApiKey(SecretString);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self, EtherscanError> {
        let key = key.into().trim().to_owned();
        if key.is_empty() {
            return Err(EtherscanError::Configuration(
                "API key must not be empty".to_owned(),
            ));
        }
        Ok(Self(SecretString::new(key)))
    }

    pub(crate) fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

// ==============================================================================
// Client Config
// ==============================================================================

#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_key: ApiKey,
    base_url: Url,
    timeout: Duration,
    connect_timeout: Duration,
}

impl ClientConfig {
    /// Mainnet configuration with default timeouts.
    pub fn new(api_key: impl Into<String>) -> Result<Self, EtherscanError> {
        Self::builder(api_key).build()
    }

    pub fn builder(api_key: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            api_key: api_key.into(),
            network: Network::default(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Build a configuration from `ETHERSCAN_*` environment variables.
    ///
    /// `ETHERSCAN_API_KEY` is required. `ETHERSCAN_BASE_URL` takes
    /// precedence over `ETHERSCAN_NETWORK` when both are set.
    pub fn from_env() -> Result<Self, EtherscanError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, EtherscanError> {
        let api_key = lookup(ENV_API_KEY).ok_or_else(|| {
            EtherscanError::Configuration(format!("{ENV_API_KEY} is not set"))
        })?;
        let mut builder = Self::builder(api_key);

        if let Some(network) = lookup(ENV_NETWORK) {
            builder = builder.network(network.parse()?);
        }
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            builder = builder.base_url(base_url);
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|e| {
                EtherscanError::Configuration(format!("invalid {ENV_TIMEOUT_SECS} `{secs}`: {e}"))
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }
}

pub struct ClientConfigBuilder {
    api_key: String,
    network: Network,
    base_url: Option<String>,
    timeout: Duration,
    connect_timeout: Duration,
}

impl ClientConfigBuilder {
    pub fn network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    /// Override the host entirely. Wins over [`Self::network`].
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    pub fn build(self) -> Result<ClientConfig, EtherscanError> {
        let api_key = ApiKey::new(self.api_key)?;
        let base_url = match self.base_url.as_deref() {
            Some(url) => parse_base_url(url)?,
            None => parse_base_url(self.network.base_url())?,
        };
        if self.timeout.is_zero() {
            return Err(EtherscanError::Configuration(
                "timeout must be greater than zero".to_owned(),
            ));
        }
        if self.connect_timeout.is_zero() {
            return Err(EtherscanError::Configuration(
                "connect timeout must be greater than zero".to_owned(),
            ));
        }

        Ok(ClientConfig {
            api_key,
            base_url,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
        })
    }
}

fn parse_base_url(base_url: &str) -> Result<Url, EtherscanError> {
    let parsed = Url::parse(base_url).map_err(|e| {
        EtherscanError::Configuration(format!(
            "invalid base URL `{base_url}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(EtherscanError::Configuration(format!(
            "unsupported base URL scheme `{other}`; expected http or https"
        ))),
    }
}
