use anyhow::Result;
use serde::Serialize;
use solana_sdk::signature::Signer;

use shdw_social_client::{derive_user_id, pdas_for_membership};

use crate::args::Cli;
use crate::output;
use crate::solana::client;

#[derive(Debug, Serialize)]
pub struct Pda {
    pub address: String,
    pub bump: u8,
}

impl From<(solana_sdk::pubkey::Pubkey, u8)> for Pda {
    fn from((address, bump): (solana_sdk::pubkey::Pubkey, u8)) -> Self {
        Self { address: address.to_string(), bump }
    }
}

#[derive(Debug, Serialize)]
pub struct PdasOut {
    pub program_id: String,
    pub wallet: String,
    pub user_id: Pda,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_profile: Option<Pda>,
}

/// Print PDAs without touching the network.
pub async fn run(cli: &Cli, wallet: Option<&str>, uid: Option<u64>) -> Result<()> {
    let cfg = client::config(cli)?;
    let program_id = cfg.program_id()?;
    let wallet = match wallet {
        Some(w) => client::parse_pubkey("wallet", w)?,
        None => client::load_keypair(cli)?.pubkey(),
    };

    let (user_id, user_profile) = match uid {
        Some(uid) => {
            let pdas = pdas_for_membership(&program_id, &wallet, uid);
            (pdas.user_id, Some(pdas.user_profile))
        }
        None => (derive_user_id(&program_id, &wallet), None),
    };

    output::print(&PdasOut {
        program_id: program_id.to_string(),
        wallet: wallet.to_string(),
        user_id: user_id.into(),
        user_profile: user_profile.map(Pda::from),
    })
}
