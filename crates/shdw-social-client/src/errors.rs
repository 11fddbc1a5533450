//! Error types for shdw-social-client.
//!
//! Every operation propagates the first failing remote call unchanged; the
//! only error raised locally on a successful fetch is [`SocialError::Ownership`].

use solana_client::client_error::ClientError;
use solana_program::pubkey::Pubkey;
use thiserror::Error;

pub type SocialResult<T> = Result<T, SocialError>;

#[derive(Debug, Error)]
pub enum SocialError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid config: {0}")]
    Config(String),

    #[error("account not found: {0}")]
    AccountNotFound(Pubkey),

    #[error("failed to decode {account} account {address}: {reason}")]
    Decode {
        account: &'static str,
        address: Pubkey,
        reason: String,
    },

    #[error("the post can be deleted only by the creator (post {post}, owner uid {owner}, caller uid {caller})")]
    Ownership { post: Pubkey, owner: u64, caller: u64 },

    #[error("storage request failed for {url}: {reason}")]
    Storage { url: String, reason: String },

    #[error("signing failed: {0}")]
    Signing(String),

    #[error("rpc error: {0}")]
    Rpc(#[from] Box<ClientError>),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("encoding error: {0}")]
    Encode(#[from] std::io::Error),
}

impl SocialError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn storage(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Storage {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// True when the error was raised by the local ownership check rather
    /// than by a remote collaborator.
    pub fn is_ownership(&self) -> bool {
        matches!(self, Self::Ownership { .. })
    }
}

impl From<ClientError> for SocialError {
    fn from(e: ClientError) -> Self {
        Self::Rpc(Box::new(e))
    }
}
