//! Ledger collaborator: account reads and instruction submission.
//!
//! Operations only need two remote capabilities from the chain, so they are
//! written against the [`Ledger`] trait. [`RpcLedger`] is the production
//! implementation over the nonblocking Solana RPC client.

use std::future::Future;
use std::sync::Arc;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_program::instruction::Instruction;
use solana_program::pubkey::Pubkey;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::Transaction;

use crate::errors::{SocialError, SocialResult};

/// Chain access used by the social operations.
pub trait Ledger: Send + Sync {
    /// Caller wallet. Used both as a PDA seed and as the transaction signer.
    fn wallet(&self) -> Pubkey;

    /// Fetch raw account data. Missing accounts fail with
    /// [`SocialError::AccountNotFound`].
    fn fetch_account_data(&self, address: &Pubkey) -> impl Future<Output = SocialResult<Vec<u8>>> + Send;

    /// Sign, submit and confirm a transaction carrying one instruction.
    fn send_instruction(&self, instruction: Instruction) -> impl Future<Output = SocialResult<Signature>> + Send;
}

pub struct RpcLedger {
    rpc: RpcClient,
    payer: Arc<Keypair>,
}

impl RpcLedger {
    pub fn new(rpc_url: &str, commitment: CommitmentConfig, payer: Arc<Keypair>) -> Self {
        Self {
            rpc: RpcClient::new_with_commitment(rpc_url.to_string(), commitment),
            payer,
        }
    }

    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }
}

impl std::fmt::Debug for RpcLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcLedger")
            .field("rpc_url", &self.rpc.url())
            .field("payer", &self.payer.pubkey())
            .finish()
    }
}

impl Ledger for RpcLedger {
    fn wallet(&self) -> Pubkey {
        self.payer.pubkey()
    }

    async fn fetch_account_data(&self, address: &Pubkey) -> SocialResult<Vec<u8>> {
        let resp = self
            .rpc
            .get_account_with_commitment(address, self.rpc.commitment())
            .await?;
        let account = resp.value.ok_or(SocialError::AccountNotFound(*address))?;
        tracing::trace!(%address, len = account.data.len(), "fetched account");
        Ok(account.data)
    }

    async fn send_instruction(&self, instruction: Instruction) -> SocialResult<Signature> {
        let blockhash = self.rpc.get_latest_blockhash().await?;
        let tx = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&self.payer.pubkey()),
            &[&*self.payer],
            blockhash,
        );
        let sig = self.rpc.send_and_confirm_transaction(&tx).await?;
        Ok(sig)
    }
}
