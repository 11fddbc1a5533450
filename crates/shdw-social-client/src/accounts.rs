//! On-chain account layouts of the shdw-social program.
//!
//! Accounts use the Anchor layout: an 8-byte discriminator
//! (`sha256("account:<Name>")[..8]`) followed by the Borsh-encoded fields.
//! Accounts are allocated with padding, so trailing bytes are ignored.

use borsh::{BorshDeserialize, BorshSerialize};
use sha2::{Digest, Sha256};
use solana_program::pubkey::Pubkey;

use crate::errors::{SocialError, SocialResult};

pub const DISCRIMINATOR_LEN: usize = 8;

/// Anchor discriminator for `<namespace>:<name>`.
pub fn discriminator(namespace: &str, name: &str) -> [u8; DISCRIMINATOR_LEN] {
    let digest = Sha256::digest(format!("{namespace}:{name}").as_bytes());
    let mut out = [0u8; DISCRIMINATOR_LEN];
    out.copy_from_slice(&digest[..DISCRIMINATOR_LEN]);
    out
}

pub fn account_discriminator(name: &str) -> [u8; DISCRIMINATOR_LEN] {
    discriminator("account", name)
}

/// A typed program account with a Borsh wire representation.
pub trait ProgramAccount: Sized {
    /// Anchor account struct name.
    const NAME: &'static str;

    type Wire: BorshSerialize + BorshDeserialize;

    fn from_wire(wire: Self::Wire) -> Self;
    fn to_wire(&self) -> Self::Wire;

    /// Decode raw account data fetched from `address`.
    fn decode(address: &Pubkey, data: &[u8]) -> SocialResult<Self> {
        let fail = |reason: String| SocialError::Decode {
            account: Self::NAME,
            address: *address,
            reason,
        };

        if data.len() < DISCRIMINATOR_LEN {
            return Err(fail(format!("account data too short: {} bytes", data.len())));
        }
        let (disc, mut body) = data.split_at(DISCRIMINATOR_LEN);
        if disc != account_discriminator(Self::NAME) {
            return Err(fail("discriminator mismatch".to_string()));
        }

        let wire = Self::Wire::deserialize(&mut body).map_err(|e| fail(e.to_string()))?;
        Ok(Self::from_wire(wire))
    }

    /// Encode into account data (discriminator + fields).
    fn encode(&self) -> SocialResult<Vec<u8>> {
        let mut out = account_discriminator(Self::NAME).to_vec();
        out.extend(borsh::to_vec(&self.to_wire())?);
        Ok(out)
    }
}

/// Maps a wallet to its numeric user id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdAccount {
    pub uid: u64,
    pub bump: u8,
}

#[derive(BorshSerialize, BorshDeserialize)]
pub struct UserIdWire {
    uid: u64,
    bump: u8,
}

impl ProgramAccount for UserIdAccount {
    const NAME: &'static str = "UserId";
    type Wire = UserIdWire;

    fn from_wire(w: UserIdWire) -> Self {
        Self { uid: w.uid, bump: w.bump }
    }

    fn to_wire(&self) -> UserIdWire {
        UserIdWire { uid: self.uid, bump: self.bump }
    }
}

/// Profile of a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserProfileAccount {
    pub timestamp: i64,
    pub uid: u64,
    /// Wallet that owns the profile.
    pub public_key: Pubkey,
    /// Storage account holding the user's files.
    pub shdw: Pubkey,
    pub bump: u8,
}

#[derive(BorshSerialize, BorshDeserialize)]
pub struct UserProfileWire {
    timestamp: i64,
    uid: u64,
    public_key: [u8; 32],
    shdw: [u8; 32],
    bump: u8,
}

impl ProgramAccount for UserProfileAccount {
    const NAME: &'static str = "UserProfile";
    type Wire = UserProfileWire;

    fn from_wire(w: UserProfileWire) -> Self {
        Self {
            timestamp: w.timestamp,
            uid: w.uid,
            public_key: Pubkey::new_from_array(w.public_key),
            shdw: Pubkey::new_from_array(w.shdw),
            bump: w.bump,
        }
    }

    fn to_wire(&self) -> UserProfileWire {
        UserProfileWire {
            timestamp: self.timestamp,
            uid: self.uid,
            public_key: self.public_key.to_bytes(),
            shdw: self.shdw.to_bytes(),
            bump: self.bump,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostAccount {
    pub timestamp: i64,
    pub uid: u64,
    pub gid: u64,
    pub bump: u8,
}

#[derive(BorshSerialize, BorshDeserialize)]
pub struct PostWire {
    timestamp: i64,
    uid: u64,
    gid: u64,
    bump: u8,
}

impl ProgramAccount for PostAccount {
    const NAME: &'static str = "Post";
    type Wire = PostWire;

    fn from_wire(w: PostWire) -> Self {
        Self {
            timestamp: w.timestamp,
            uid: w.uid,
            gid: w.gid,
            bump: w.bump,
        }
    }

    fn to_wire(&self) -> PostWire {
        PostWire {
            timestamp: self.timestamp,
            uid: self.uid,
            gid: self.gid,
            bump: self.bump,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn discriminator_matches_anchor_convention() {
        let digest = Sha256::digest(b"account:Post");
        assert_eq!(account_discriminator("Post"), digest[..8]);
    }

    #[test]
    fn decodes_padded_profile() {
        let profile = UserProfileAccount {
            timestamp: 1_660_000_000,
            uid: 12,
            public_key: Pubkey::new_unique(),
            shdw: Pubkey::new_unique(),
            bump: 254,
        };
        let mut data = profile.encode().unwrap();
        data.extend_from_slice(&[0u8; 64]);

        let decoded = UserProfileAccount::decode(&Pubkey::new_unique(), &data).unwrap();
        assert_eq!(decoded, profile);
    }

    #[test]
    fn rejects_wrong_account_type() {
        let post = PostAccount { timestamp: 1, uid: 2, gid: 3, bump: 4 };
        let data = post.encode().unwrap();
        let err = UserIdAccount::decode(&Pubkey::new_unique(), &data).unwrap_err();
        assert_matches!(err, SocialError::Decode { account: "UserId", .. });
    }

    #[test]
    fn rejects_truncated_data() {
        let data = account_discriminator("Post").to_vec();
        assert_matches!(
            PostAccount::decode(&Pubkey::new_unique(), &data),
            Err(SocialError::Decode { account: "Post", .. })
        );
        assert_matches!(
            PostAccount::decode(&Pubkey::new_unique(), &[1, 2, 3]),
            Err(SocialError::Decode { .. })
        );
    }
}
