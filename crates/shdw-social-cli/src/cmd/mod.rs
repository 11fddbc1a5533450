use anyhow::Result;

use crate::args::{Cli, Command};

mod doctor;
mod group;
mod pdas;
mod post;
mod user;

pub async fn dispatch(cli: Cli) -> Result<()> {
    match &cli.command {
        Command::JoinGroup { group_id } => group::join(&cli, group_id).await,
        Command::LeaveGroup { group_id } => group::leave(&cli, group_id).await,
        Command::DeletePost { post } => post::delete(&cli, post).await,
        Command::Post { post, files } => post::show(&cli, post, *files).await,
        Command::User { wallet } => user::run(&cli, wallet.as_deref()).await,
        Command::Pdas { wallet, uid } => pdas::run(&cli, wallet.as_deref(), *uid).await,
        Command::Doctor => doctor::run(&cli).await,
    }
}
