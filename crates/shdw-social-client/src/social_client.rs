//! Social operations against the shdw-social program.
//!
//! Each operation is one sequential chain:
//! - derive PDAs
//! - fetch and decode accounts
//! - check ownership
//! - delete storage files (content before manifest)
//! - submit exactly one instruction
//!
//! The first failing step rejects the whole call with that step's error.
//! Nothing is retried and completed deletions are not rolled back.

use std::sync::Arc;

use solana_program::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use tracing::{debug, info};

use crate::accounts::{PostAccount, ProgramAccount, UserIdAccount, UserProfileAccount};
use crate::config::{validate_config, ClientConfig};
use crate::constants::POST_MANIFEST_EXT;
use crate::errors::{SocialError, SocialResult};
use crate::instructions::{self, DeletePostAccounts, MembershipAccounts};
use crate::keys::post_hash;
use crate::ledger::{Ledger, RpcLedger};
use crate::models::{Post, PostFileData, User};
use crate::pda;
use crate::storage::{file_url, FileStorage, ShadowDriveClient, StorageVersion};

#[derive(Debug)]
pub struct SocialClient<L, S> {
    program_id: Pubkey,
    file_domain: String,
    ledger: L,
    storage: S,
}

impl SocialClient<RpcLedger, ShadowDriveClient> {
    /// Build a client backed by Solana RPC and the hosted storage network,
    /// both authorized by `wallet`.
    pub fn connect(cfg: &ClientConfig, wallet: Keypair) -> SocialResult<Self> {
        validate_config(cfg)?;
        let wallet = Arc::new(wallet);
        let ledger = RpcLedger::new(&cfg.rpc_url, cfg.commitment.to_config(), wallet.clone());
        let storage = ShadowDriveClient::with_endpoint(&cfg.storage_endpoint, wallet);
        Self::from_config(cfg, ledger, storage)
    }
}

impl<L: Ledger, S: FileStorage> SocialClient<L, S> {
    pub fn new(program_id: Pubkey, file_domain: impl Into<String>, ledger: L, storage: S) -> Self {
        Self {
            program_id,
            file_domain: file_domain.into(),
            ledger,
            storage,
        }
    }

    pub fn from_config(cfg: &ClientConfig, ledger: L, storage: S) -> SocialResult<Self> {
        Ok(Self::new(cfg.program_id()?, cfg.file_domain.clone(), ledger, storage))
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    async fn fetch<T: ProgramAccount>(&self, address: &Pubkey) -> SocialResult<T> {
        let data = self.ledger.fetch_account_data(address).await?;
        T::decode(address, &data)
    }

    /// Resolve the numeric user id owned by `wallet`.
    async fn fetch_uid(&self, wallet: &Pubkey) -> SocialResult<(Pubkey, u64)> {
        let (user_id_pda, _) = pda::derive_user_id(&self.program_id, wallet);
        debug!(%wallet, %user_id_pda, "derived user id pda");
        let account: UserIdAccount = self.fetch(&user_id_pda).await?;
        Ok((user_id_pda, account.uid))
    }

    async fn fetch_profile(&self, uid: u64) -> SocialResult<User> {
        let (profile_pda, _) = pda::derive_user_profile(&self.program_id, uid);
        debug!(uid, %profile_pda, "derived user profile pda");
        let profile: UserProfileAccount = self.fetch(&profile_pda).await?;
        Ok(User::from(&profile))
    }

    /// Fetch a post account.
    #[tracing::instrument(skip(self))]
    pub async fn get_post(&self, post: Pubkey) -> SocialResult<Post> {
        let account: PostAccount = self.fetch(&post).await?;
        Ok(Post::new(post, &account))
    }

    /// Fetch the profile of the user registered by `wallet`.
    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, wallet: Pubkey) -> SocialResult<User> {
        let (_, uid) = self.fetch_uid(&wallet).await?;
        self.fetch_profile(uid).await
    }

    /// Fetch a profile by numeric user id.
    #[tracing::instrument(skip(self))]
    pub async fn get_user_by_id(&self, uid: u64) -> SocialResult<User> {
        self.fetch_profile(uid).await
    }

    /// Read and decode the manifest of `post` from storage account `shdw`.
    #[tracing::instrument(skip(self))]
    pub async fn get_post_file_data(&self, post: Pubkey, shdw: Pubkey) -> SocialResult<PostFileData> {
        let url = file_url(&self.file_domain, &shdw.to_string(), &format!("{post}{POST_MANIFEST_EXT}"));
        let bytes = self.storage.get_file(&url).await?;
        Ok(PostFileData::from_slice(&bytes)?)
    }

    /// Join a group. `group_id` is the decimal group id.
    #[tracing::instrument(skip(self), fields(wallet = %self.ledger.wallet()))]
    pub async fn join_group(&self, group_id: &str) -> SocialResult<Signature> {
        let gid = parse_group_id(group_id)?;
        let accounts = self.membership_accounts().await?;
        let ix = instructions::ix_join_group(&self.program_id, &accounts, gid)?;
        let sig = self.ledger.send_instruction(ix).await?;
        info!(%sig, gid, "joined group");
        Ok(sig)
    }

    /// Leave a group. `group_id` is the decimal group id.
    #[tracing::instrument(skip(self), fields(wallet = %self.ledger.wallet()))]
    pub async fn leave_group(&self, group_id: &str) -> SocialResult<Signature> {
        let gid = parse_group_id(group_id)?;
        let accounts = self.membership_accounts().await?;
        let ix = instructions::ix_leave_group(&self.program_id, &accounts, gid)?;
        let sig = self.ledger.send_instruction(ix).await?;
        info!(%sig, gid, "left group");
        Ok(sig)
    }

    async fn membership_accounts(&self) -> SocialResult<MembershipAccounts> {
        let wallet = self.ledger.wallet();
        let (user_id, uid) = self.fetch_uid(&wallet).await?;
        let (user_profile, _) = pda::derive_user_profile(&self.program_id, uid);
        debug!(uid, %user_profile, "derived user profile pda");
        Ok(MembershipAccounts {
            user: wallet,
            user_id,
            user_profile,
        })
    }

    /// Delete a post created by the caller, together with its stored files.
    ///
    /// Files go first (text, then media in manifest order, then the
    /// manifest), then the post account is closed on chain.
    #[tracing::instrument(skip(self), fields(wallet = %self.ledger.wallet()))]
    pub async fn delete_post(&self, post: Pubkey) -> SocialResult<Signature> {
        let post = self.get_post(post).await?;

        let wallet = self.ledger.wallet();
        let (user_id_pda, caller_uid) = self.fetch_uid(&wallet).await?;
        if post.user_id != caller_uid {
            return Err(SocialError::Ownership {
                post: post.public_key,
                owner: post.user_id,
                caller: caller_uid,
            });
        }

        let author = self.fetch_profile(post.user_id).await?;
        let shdw = author.shdw.to_string();
        let file_data = self.get_post_file_data(post.public_key, author.shdw).await?;

        for name in file_data.deletion_order(&post) {
            let url = file_url(&self.file_domain, &shdw, &name);
            self.storage.delete_file(&shdw, &url, StorageVersion::V2).await?;
        }
        debug!(post = %post.public_key, "removed post files");

        let hash = post_hash(&file_data.timestamp, post.user_id, post.group_id)?;
        let (post_pda, _) = pda::derive_post(&self.program_id, &hash);
        let accounts = DeletePostAccounts {
            user: wallet,
            user_id: user_id_pda,
            post: post_pda,
        };
        let ix = instructions::ix_delete_post(&self.program_id, &accounts, post.group_id, &hash)?;
        let sig = self.ledger.send_instruction(ix).await?;
        info!(%sig, post = %post.public_key, "deleted post");
        Ok(sig)
    }
}

fn parse_group_id(group_id: &str) -> SocialResult<u64> {
    group_id
        .trim()
        .parse()
        .map_err(|_| SocialError::invalid_argument(format!("invalid group id: {group_id:?}")))
}
