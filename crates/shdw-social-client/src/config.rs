//! Client configuration.
//!
//! Configuration is an explicit, serializable object supplied by the caller.
//! This crate never reads environment variables; the CLI maps flags and
//! environment into a [`ClientConfig`].

use serde::{Deserialize, Serialize};
use solana_program::pubkey::Pubkey;
use solana_sdk::commitment_config::CommitmentConfig;

use crate::constants::{DEFAULT_PROGRAM_ID, DEFAULT_RPC_URL, SHADOW_DRIVE_DOMAIN, SHADOW_DRIVE_ENDPOINT};
use crate::errors::{SocialError, SocialResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub rpc_url: String,
    pub program_id: String,
    pub commitment: Commitment,
    /// Storage API endpoint used for deletions.
    pub storage_endpoint: String,
    /// Public file domain, including the trailing slash.
    pub file_domain: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            program_id: DEFAULT_PROGRAM_ID.to_string(),
            commitment: Commitment::Confirmed,
            storage_endpoint: SHADOW_DRIVE_ENDPOINT.to_string(),
            file_domain: SHADOW_DRIVE_DOMAIN.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn program_id(&self) -> SocialResult<Pubkey> {
        self.program_id
            .parse()
            .map_err(|_| SocialError::config(format!("invalid program id: {}", self.program_id)))
    }
}

/// Commitment level used for reads and confirmations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    Confirmed,
    Finalized,
}

impl Commitment {
    pub fn parse(s: &str) -> SocialResult<Self> {
        match s {
            "processed" => Ok(Self::Processed),
            "confirmed" => Ok(Self::Confirmed),
            "finalized" => Ok(Self::Finalized),
            _ => Err(SocialError::config(format!("unsupported commitment: {s}"))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processed => "processed",
            Self::Confirmed => "confirmed",
            Self::Finalized => "finalized",
        }
    }

    pub fn to_config(self) -> CommitmentConfig {
        match self {
            Self::Processed => CommitmentConfig::processed(),
            Self::Confirmed => CommitmentConfig::confirmed(),
            Self::Finalized => CommitmentConfig::finalized(),
        }
    }
}

fn is_http_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Validate a full configuration object.
pub fn validate_config(cfg: &ClientConfig) -> SocialResult<()> {
    if !is_http_url(&cfg.rpc_url) {
        return Err(SocialError::config("rpc_url must be an http(s) url"));
    }

    cfg.program_id()?;

    if !is_http_url(&cfg.storage_endpoint) {
        return Err(SocialError::config("storage_endpoint must be an http(s) url"));
    }

    if !is_http_url(&cfg.file_domain) || !cfg.file_domain.ends_with('/') {
        return Err(SocialError::config(
            "file_domain must be an http(s) url ending with '/'",
        ));
    }

    Ok(())
}
