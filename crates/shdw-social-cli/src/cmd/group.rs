use anyhow::Result;
use serde::Serialize;

use crate::args::Cli;
use crate::output;
use crate::solana::client;

#[derive(Debug, Serialize)]
pub struct GroupOut {
    pub ok: bool,
    pub action: &'static str,
    pub group_id: String,
    pub signature: String,
}

pub async fn join(cli: &Cli, group_id: &str) -> Result<()> {
    let client = client::connect(cli)?;
    let sig = client.join_group(group_id).await?;
    output::print(&GroupOut {
        ok: true,
        action: "join",
        group_id: group_id.to_string(),
        signature: sig.to_string(),
    })
}

pub async fn leave(cli: &Cli, group_id: &str) -> Result<()> {
    let client = client::connect(cli)?;
    let sig = client.leave_group(group_id).await?;
    output::print(&GroupOut {
        ok: true,
        action: "leave",
        group_id: group_id.to_string(),
        signature: sig.to_string(),
    })
}
