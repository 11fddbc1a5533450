//! PDA derivation helpers for the shdw-social program.
//!
//! These helpers implement deterministic address derivation and match the
//! on-chain program's seeds. Derivation never fails.

use solana_program::pubkey::Pubkey;

use crate::constants::{SEED_POST, SEED_USER_ID, SEED_USER_PROFILE};

/// PDAs touched by group membership instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembershipPdas {
    pub user_id: (Pubkey, u8),
    pub user_profile: (Pubkey, u8),
}

/// Derive the user id PDA owned by a wallet.
pub fn derive_user_id(program_id: &Pubkey, wallet: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_USER_ID, wallet.as_ref()], program_id)
}

/// Derive a user profile PDA by numeric user id.
///
/// The id is seeded as its decimal UTF-8 representation, not as bytes.
pub fn derive_user_profile(program_id: &Pubkey, uid: u64) -> (Pubkey, u8) {
    let uid = uid.to_string();
    Pubkey::find_program_address(&[SEED_USER_PROFILE, uid.as_bytes()], program_id)
}

/// Derive a post PDA from the post hash public key.
pub fn derive_post(program_id: &Pubkey, hash: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_POST, hash.as_ref()], program_id)
}

pub fn pdas_for_membership(program_id: &Pubkey, wallet: &Pubkey, uid: u64) -> MembershipPdas {
    MembershipPdas {
        user_id: derive_user_id(program_id, wallet),
        user_profile: derive_user_profile(program_id, uid),
    }
}
