//! Deterministic keypairs derived from seed strings.
//!
//! Post accounts are addressed by the public key of a keypair generated from
//! `"{timestamp}{user_id}{group_id}"`, so the same post always maps to the
//! same PDA. The secret half is never used for signing.

use sha2::{Digest, Sha256};
use solana_program::pubkey::Pubkey;
use solana_sdk::signature::{keypair_from_seed as ed25519_from_seed, Keypair, Signer};

use crate::errors::{SocialError, SocialResult};

/// Build an ed25519 keypair whose secret seed is `sha256(seed)`.
pub fn keypair_from_seed(seed: &str) -> SocialResult<Keypair> {
    let digest = Sha256::digest(seed.as_bytes());
    ed25519_from_seed(digest.as_slice()).map_err(|e| SocialError::Signing(e.to_string()))
}

/// Hash public key identifying a post.
pub fn post_hash(timestamp: &str, uid: u64, gid: u64) -> SocialResult<Pubkey> {
    let kp = keypair_from_seed(&format!("{timestamp}{uid}{gid}"))?;
    Ok(kp.pubkey())
}
