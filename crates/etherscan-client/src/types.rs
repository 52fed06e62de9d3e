//! Argument types for endpoint wrappers.
//!
//! Every type renders to the exact string the service expects through
//! `Display`, which is what the request builder serializes.

use std::fmt;
use std::str::FromStr;

use crate::error::EtherscanError;

// ==============================================================================
// Hex Identifiers
// ==============================================================================

fn parse_prefixed_hex(s: &str, bytes: usize, what: &str) -> Result<String, EtherscanError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .ok_or_else(|| EtherscanError::InvalidArgument(format!("{what} `{s}` must start with 0x")))?;
    if digits.len() != bytes * 2 {
        return Err(EtherscanError::InvalidArgument(format!(
            "{what} `{s}` must have {} hex digits, got {}",
            bytes * 2,
            digits.len()
        )));
    }
    hex::decode(digits)
        .map_err(|e| EtherscanError::InvalidArgument(format!("invalid {what} `{s}`: {e}")))?;
    Ok(format!("0x{}", digits.to_ascii_lowercase()))
}

/// 20-byte account or contract address, kept in lowercase `0x` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl FromStr for Address {
    type Err = EtherscanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_prefixed_hex(s.trim(), 20, "address").map(Self)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 32-byte transaction hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TxHash(String);

impl FromStr for TxHash {
    type Err = EtherscanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_prefixed_hex(s.trim(), 32, "transaction hash").map(Self)
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hex-encoded quantity used by the `proxy` module for block numbers and
/// indices, e.g. `0x10fb78`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexQuantity(pub u64);

impl fmt::Display for HexQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl FromStr for HexQuantity {
    type Err = EtherscanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| {
                EtherscanError::InvalidArgument(format!("hex quantity `{s}` must start with 0x"))
            })?;
        u64::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|e| EtherscanError::InvalidArgument(format!("invalid hex quantity `{s}`: {e}")))
    }
}

// ==============================================================================
// Enumerated Parameters
// ==============================================================================

macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum!(
    /// Pre-defined block parameter.
    BlockTag { Earliest => "earliest", Pending => "pending", Latest => "latest" }
);

wire_enum!(Sort { Asc => "asc", Desc => "desc" });

wire_enum!(
    /// Canonical blocks or uncle blocks only.
    BlockType { Blocks => "blocks", Uncles => "uncles" }
);

wire_enum!(
    /// Which side of a timestamp to pick the closest block from.
    Closest { Before => "before", After => "after" }
);

wire_enum!(ClientType { Geth => "geth", Parity => "parity" });

wire_enum!(SyncMode { Default => "default", Archive => "archive" });

// ==============================================================================
// Ranges
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub offset: u32,
}

impl Pagination {
    pub fn new(page: u32, offset: u32) -> Self {
        Self { page, offset }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    pub start: u64,
    pub end: u64,
}

impl BlockRange {
    pub fn new(start: u64, end: u64) -> Result<Self, EtherscanError> {
        if start > end {
            return Err(EtherscanError::InvalidArgument(format!(
                "block range start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }
}
