use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{read_keypair_file, Keypair};

use shdw_social_client::{validate_config, ClientConfig, Ledger, RpcLedger, ShadowDriveClient, SocialClient};

use crate::args::Cli;

pub type Client = SocialClient<RpcLedger, ShadowDriveClient>;

/// Resolve the keypair path: `--keypair`, then the Solana CLI default.
pub fn keypair_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(p) = &cli.keypair {
        return Ok(PathBuf::from(p));
    }
    let home = std::env::var_os("HOME").ok_or_else(|| anyhow!("HOME is not set; pass --keypair"))?;
    Ok(PathBuf::from(home).join(".config").join("solana").join("id.json"))
}

pub fn load_keypair(cli: &Cli) -> Result<Keypair> {
    let path = keypair_path(cli)?;
    read_keypair_file(&path).map_err(|e| anyhow!("failed to read keypair {}: {e}", path.display()))
}

pub fn config(cli: &Cli) -> Result<ClientConfig> {
    let cfg = cli.client_config()?;
    validate_config(&cfg)?;
    Ok(cfg)
}

pub fn connect(cli: &Cli) -> Result<Client> {
    let cfg = config(cli)?;
    let wallet = load_keypair(cli)?;
    let client = SocialClient::connect(&cfg, wallet)?;
    tracing::debug!(rpc_url = %cfg.rpc_url, program_id = %cfg.program_id, "client connected");
    Ok(client)
}

pub fn parse_pubkey(label: &str, s: &str) -> Result<Pubkey> {
    s.trim().parse().with_context(|| format!("invalid {label} public key: {s}"))
}

/// The wallet given on the command line, or the connected client's own.
pub fn wallet_or_own(client: &Client, wallet: Option<&str>) -> Result<Pubkey> {
    match wallet {
        Some(w) => parse_pubkey("wallet", w),
        None => Ok(client.ledger().wallet()),
    }
}
