use anyhow::Result;
use serde::Serialize;
use solana_sdk::signature::Signer;

use shdw_social_client::Ledger;

use crate::args::Cli;
use crate::output;
use crate::solana::client;

#[derive(Debug, Serialize)]
pub struct Check {
    pub name: String,
    pub ok: bool,
    pub detail: String,
}

impl Check {
    fn from_result<T>(name: &str, res: Result<T>, detail: impl FnOnce(&T) -> String) -> Self {
        match res {
            Ok(v) => Self { name: name.to_string(), ok: true, detail: detail(&v) },
            Err(e) => Self { name: name.to_string(), ok: false, detail: format!("{e:#}") },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DoctorOut {
    pub ok: bool,
    pub checks: Vec<Check>,
}

pub async fn run(cli: &Cli) -> Result<()> {
    let mut checks = Vec::new();

    checks.push(Check::from_result("config", client::config(cli), |cfg| {
        format!("program {} via {}", cfg.program_id, cfg.rpc_url)
    }));

    checks.push(Check::from_result("keypair", client::load_keypair(cli), |kp| {
        format!("wallet {}", kp.pubkey())
    }));

    // RPC is only probed when the client can be built at all.
    if checks.iter().all(|c| c.ok) {
        let c = client::connect(cli)?;
        let version = c.ledger().rpc().get_version().await.map_err(anyhow::Error::from);
        checks.push(Check::from_result("rpc", version, |v| format!("solana-core {}", v.solana_core)));

        let wallet = c.ledger().wallet();
        checks.push(Check::from_result(
            "profile",
            c.get_user(wallet).await.map_err(anyhow::Error::from),
            |u| format!("uid {} storage {}", u.user_id, u.shdw),
        ));
    }

    let ok = checks.iter().all(|c| c.ok || c.name == "profile");
    output::print(&DoctorOut { ok, checks })?;
    Ok(())
}
