//! Constants shared between the on-chain program and clients.
//!
//! Keep these stable because they affect PDA derivation.

use solana_program::pubkey::Pubkey;

/// PDA seed for the wallet -> user id mapping account.
pub const SEED_USER_ID: &[u8] = b"user_id";

/// PDA seed for user profile accounts (followed by the decimal user id).
pub const SEED_USER_PROFILE: &[u8] = b"user_profile";

/// PDA seed for post accounts (followed by the post hash public key).
pub const SEED_POST: &[u8] = b"post";

/// Default program id.
pub const DEFAULT_PROGRAM_ID: &str = "7TSufXLvUTDdBByckmKSEwVVA8K8ec9kt2GnQUZcpa9Z";

/// Public file domain of the storage network. Files resolve to
/// `<domain><storage account>/<file name>`.
pub const SHADOW_DRIVE_DOMAIN: &str = "https://shdw-drive.genesysgo.net/";

/// Storage network API endpoint used for signed deletions.
pub const SHADOW_DRIVE_ENDPOINT: &str = "https://shadow-storage.genesysgo.net";

/// Default RPC endpoint.
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

pub fn default_program_id() -> Pubkey {
    DEFAULT_PROGRAM_ID.parse().unwrap_or_default()
}

/// Suffix of a post's manifest file in the author's storage account.
pub const POST_MANIFEST_EXT: &str = ".json";
