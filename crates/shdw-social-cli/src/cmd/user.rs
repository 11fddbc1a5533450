use anyhow::Result;

use crate::args::Cli;
use crate::output;
use crate::solana::client;

pub async fn run(cli: &Cli, wallet: Option<&str>) -> Result<()> {
    let client = client::connect(cli)?;
    let wallet = client::wallet_or_own(&client, wallet)?;
    let user = client.get_user(wallet).await?;
    output::print(&user)
}
