//! shdw-social-client
//!
//! A small, focused Rust client for the shdw-social on-chain program and the
//! storage network holding post files.
//!
//! It includes:
//! - PDA derivation helpers and seed constants
//! - deterministic post hash keypairs
//! - Anchor account decoding and instruction builders
//! - `Ledger` / `FileStorage` collaborator traits with RPC and HTTP backends
//! - `SocialClient`, exposing `join_group`, `leave_group`, `delete_post`
//!   and read helpers
//!
//! The program id defaults to the deployed program and can be overridden
//! through [`ClientConfig`].

pub mod accounts;
pub mod config;
pub mod constants;
pub mod errors;
pub mod instructions;
pub mod keys;
pub mod ledger;
pub mod models;
pub mod pda;
pub mod social_client;
pub mod storage;

pub use config::{validate_config, ClientConfig, Commitment};
pub use constants::*;
pub use errors::{SocialError, SocialResult};
pub use ledger::{Ledger, RpcLedger};
pub use models::{Post, PostFileData, PostMedia, User};
pub use pda::*;
pub use social_client::SocialClient;
pub use storage::{file_url, FileStorage, ShadowDriveClient, StorageVersion};
