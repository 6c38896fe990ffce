//! Client configuration, loadable from a JSON file.

use std::{fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};
use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey};

use crate::error::{Error, Result};

pub const DEVNET_RPC:   &str = "https://api.devnet.solana.com";
pub const MAINNET_RPC:  &str = "https://api.mainnet-beta.solana.com";
pub const LOCALNET_RPC: &str = "http://127.0.0.1:8899";

fn default_commitment() -> String {
    "confirmed".to_string()
}

/// Connection settings for [`crate::FixedRatioClient`].
///
/// ```json
/// { "rpc_url": "https://api.devnet.solana.com",
///   "program_id": "…",
///   "commitment": "confirmed" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub rpc_url:    String,
    /// Deployed fixed-ratio program, base-58.
    #[serde(with = "pubkey_serde")]
    pub program_id: Pubkey,
    #[serde(default = "default_commitment")]
    pub commitment: String,
}

impl ClientConfig {
    pub fn new(rpc_url: impl Into<String>, program_id: Pubkey) -> Self {
        Self { rpc_url: rpc_url.into(), program_id, commitment: default_commitment() }
    }

    pub fn devnet(program_id: Pubkey) -> Self {
        Self::new(DEVNET_RPC, program_id)
    }

    pub fn mainnet(program_id: Pubkey) -> Self {
        Self::new(MAINNET_RPC, program_id)
    }

    pub fn localnet(program_id: Pubkey) -> Self {
        Self::new(LOCALNET_RPC, program_id)
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rpc_url.trim().is_empty() {
            return Err(Error::Config("rpc_url must not be empty".into()));
        }
        if !(self.rpc_url.starts_with("http://") || self.rpc_url.starts_with("https://")) {
            return Err(Error::Config(format!("rpc_url '{}' must be http(s)", self.rpc_url)));
        }
        self.commitment_config()?;
        Ok(())
    }

    /// Parsed commitment level.
    pub fn commitment_config(&self) -> Result<CommitmentConfig> {
        CommitmentConfig::from_str(&self.commitment)
            .map_err(|_| Error::Config(format!("unknown commitment '{}'", self.commitment)))
    }
}

mod pubkey_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use solana_sdk::pubkey::Pubkey;
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(key: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&key.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let s = String::deserialize(deserializer)?;
        Pubkey::from_str(&s).map_err(serde::de::Error::custom)
    }
}
