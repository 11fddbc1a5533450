//! File storage collaborator (Shadow Drive).
//!
//! Posts keep a JSON manifest plus optional text and media files in the
//! author's storage account. Operations read the manifest and delete files
//! through the [`FileStorage`] trait; [`ShadowDriveClient`] talks to the
//! hosted service over HTTP.

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use solana_sdk::signature::{Keypair, Signer};

use crate::constants::SHADOW_DRIVE_ENDPOINT;
use crate::errors::{SocialError, SocialResult};

/// Storage deletion protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageVersion {
    /// Off-chain deletion authorized by a signed message.
    V2,
}

impl StorageVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V2 => "v2",
        }
    }
}

/// Build the public URL of a file in a storage account.
pub fn file_url(domain: &str, storage_account: &str, name: &str) -> String {
    format!("{domain}{storage_account}/{name}")
}

pub trait FileStorage: Send + Sync {
    /// Read a file by URL.
    fn get_file(&self, url: &str) -> impl Future<Output = SocialResult<Vec<u8>>> + Send;

    /// Delete a file by URL from `storage_account`.
    fn delete_file(
        &self,
        storage_account: &str,
        url: &str,
        version: StorageVersion,
    ) -> impl Future<Output = SocialResult<()>> + Send;
}

#[derive(Debug, Serialize)]
struct DeleteFileRequest<'a> {
    signer: String,
    message: String,
    location: &'a str,
}

/// HTTP client for the hosted storage network.
pub struct ShadowDriveClient {
    http: reqwest::Client,
    endpoint: String,
    signer: Arc<Keypair>,
}

impl ShadowDriveClient {
    pub fn new(signer: Arc<Keypair>) -> Self {
        Self::with_endpoint(SHADOW_DRIVE_ENDPOINT, signer)
    }

    pub fn with_endpoint(endpoint: &str, signer: Arc<Keypair>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            signer,
        }
    }

    fn delete_request<'a>(&self, storage_account: &str, url: &'a str) -> DeleteFileRequest<'a> {
        let sig = self.signer.sign_message(delete_message(storage_account, url).as_bytes());
        DeleteFileRequest {
            signer: self.signer.pubkey().to_string(),
            message: bs58::encode(sig).into_string(),
            location: url,
        }
    }
}

impl std::fmt::Debug for ShadowDriveClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShadowDriveClient")
            .field("endpoint", &self.endpoint)
            .field("signer", &self.signer.pubkey())
            .finish()
    }
}

/// Message the wallet signs to authorize a v2 deletion.
pub fn delete_message(storage_account: &str, url: &str) -> String {
    format!("Shadow Drive Signed Message:\nStorageAccount: {storage_account}\nFile to delete: {url}")
}

impl FileStorage for ShadowDriveClient {
    async fn get_file(&self, url: &str) -> SocialResult<Vec<u8>> {
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SocialError::storage(url, format!("http status {status}")));
        }
        Ok(resp.bytes().await?.to_vec())
    }

    async fn delete_file(&self, storage_account: &str, url: &str, version: StorageVersion) -> SocialResult<()> {
        let body = self.delete_request(storage_account, url);
        let resp = self
            .http
            .post(format!("{}/delete-file", self.endpoint))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
            return Err(SocialError::storage(url, format!("http status {status}: {detail}")));
        }

        tracing::debug!(url, version = version.as_str(), "deleted storage file");
        Ok(())
    }
}
