use clap::{Parser, Subcommand};

use shdw_social_client::{ClientConfig, Commitment, SocialResult};

#[derive(Parser, Debug, Clone)]
#[command(name = "shdw-social", version, about = "shdw-social CLI")]
pub struct Cli {
    /// Emit JSON output on stdout and JSON logs on stderr.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log filter (e.g. "info", "shdw_social_client=debug").
    #[arg(long, global = true, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Solana RPC endpoint.
    #[arg(long, global = true, env = "SHDW_SOCIAL_RPC_URL", default_value = shdw_social_client::DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Program id of the social program.
    #[arg(long, global = true, env = "SHDW_SOCIAL_PROGRAM_ID", default_value = shdw_social_client::DEFAULT_PROGRAM_ID)]
    pub program_id: String,

    /// Commitment level: processed|confirmed|finalized
    #[arg(long, global = true, default_value = "confirmed")]
    pub commitment: String,

    /// Storage API endpoint used for deletions.
    #[arg(long, global = true, default_value = shdw_social_client::SHADOW_DRIVE_ENDPOINT)]
    pub storage_endpoint: String,

    /// Public file domain of the storage network.
    #[arg(long, global = true, default_value = shdw_social_client::SHADOW_DRIVE_DOMAIN)]
    pub file_domain: String,

    /// Solana keypair file (default: ~/.config/solana/id.json)
    #[arg(long, global = true, env = "SHDW_SOCIAL_KEYPAIR")]
    pub keypair: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn client_config(&self) -> SocialResult<ClientConfig> {
        Ok(ClientConfig {
            rpc_url: self.rpc_url.clone(),
            program_id: self.program_id.clone(),
            commitment: Commitment::parse(&self.commitment)?,
            storage_endpoint: self.storage_endpoint.clone(),
            file_domain: self.file_domain.clone(),
        })
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Join a group.
    JoinGroup {
        /// Numeric group id.
        group_id: String,
    },

    /// Leave a group.
    LeaveGroup {
        /// Numeric group id.
        group_id: String,
    },

    /// Delete one of your posts and its stored files.
    DeletePost {
        /// Post account public key.
        post: String,
    },

    /// Show a post account.
    Post {
        post: String,
        /// Also read the post manifest from storage.
        #[arg(long)]
        files: bool,
    },

    /// Show the profile registered by a wallet.
    User {
        /// Wallet public key (default: the keypair's wallet).
        wallet: Option<String>,
    },

    /// Print derived program addresses.
    Pdas {
        /// Wallet public key (default: the keypair's wallet).
        #[arg(long)]
        wallet: Option<String>,
        #[arg(long)]
        uid: Option<u64>,
    },

    /// Check configuration, keypair and RPC connectivity.
    Doctor,
}
