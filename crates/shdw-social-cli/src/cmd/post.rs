use anyhow::Result;
use serde::Serialize;

use shdw_social_client::{Post, PostFileData};

use crate::args::Cli;
use crate::output;
use crate::solana::client;

#[derive(Debug, Serialize)]
pub struct DeleteOut {
    pub ok: bool,
    pub post: String,
    pub signature: String,
}

#[derive(Debug, Serialize)]
pub struct ShowOut {
    pub post: Post,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<PostFileData>,
}

pub async fn delete(cli: &Cli, post: &str) -> Result<()> {
    let post = client::parse_pubkey("post", post)?;
    let client = client::connect(cli)?;
    let sig = client.delete_post(post).await?;
    output::print(&DeleteOut {
        ok: true,
        post: post.to_string(),
        signature: sig.to_string(),
    })
}

pub async fn show(cli: &Cli, post: &str, with_files: bool) -> Result<()> {
    let post = client::parse_pubkey("post", post)?;
    let client = client::connect(cli)?;
    let view = client.get_post(post).await?;

    let files = if with_files {
        let author = client.get_user_by_id(view.user_id).await?;
        Some(client.get_post_file_data(post, author.shdw).await?)
    } else {
        None
    };

    output::print(&ShowOut { post: view, files })
}
