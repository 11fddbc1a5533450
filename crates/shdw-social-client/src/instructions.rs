//! Instruction builders for the shdw-social program.
//!
//! Instruction data is the Anchor method discriminator
//! (`sha256("global:<method>")[..8]`) followed by the Borsh-encoded args.

use borsh::BorshSerialize;
use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::pubkey::Pubkey;

use crate::accounts::discriminator;
use crate::errors::SocialResult;

/// Program methods invoked by this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    JoinGroup,
    LeaveGroup,
    DeletePost,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JoinGroup => "join_group",
            Self::LeaveGroup => "leave_group",
            Self::DeletePost => "delete_post",
        }
    }

    pub fn discriminator(&self) -> [u8; 8] {
        discriminator("global", self.as_str())
    }

    /// Identify the method encoded in instruction data.
    pub fn from_data(data: &[u8]) -> Option<Self> {
        let head = data.get(..8)?;
        [Self::JoinGroup, Self::LeaveGroup, Self::DeletePost]
            .into_iter()
            .find(|m| m.discriminator().as_slice() == head)
    }
}

#[derive(BorshSerialize)]
struct GroupArgs {
    group_id: u64,
}

#[derive(BorshSerialize)]
struct DeletePostArgs {
    group_id: u64,
    hash: [u8; 32],
}

fn encode<A: BorshSerialize>(method: Method, args: &A) -> SocialResult<Vec<u8>> {
    let mut data = method.discriminator().to_vec();
    data.extend(borsh::to_vec(args)?);
    Ok(data)
}

/// Accounts shared by group membership instructions.
#[derive(Debug, Clone, Copy)]
pub struct MembershipAccounts {
    pub user: Pubkey,
    pub user_id: Pubkey,
    pub user_profile: Pubkey,
}

impl MembershipAccounts {
    fn metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.user, true),
            AccountMeta::new_readonly(self.user_id, false),
            AccountMeta::new(self.user_profile, false),
        ]
    }
}

fn ix_membership(
    program_id: &Pubkey,
    method: Method,
    accounts: &MembershipAccounts,
    group_id: u64,
) -> SocialResult<Instruction> {
    Ok(Instruction {
        program_id: *program_id,
        accounts: accounts.metas(),
        data: encode(method, &GroupArgs { group_id })?,
    })
}

pub fn ix_join_group(program_id: &Pubkey, accounts: &MembershipAccounts, group_id: u64) -> SocialResult<Instruction> {
    ix_membership(program_id, Method::JoinGroup, accounts, group_id)
}

pub fn ix_leave_group(program_id: &Pubkey, accounts: &MembershipAccounts, group_id: u64) -> SocialResult<Instruction> {
    ix_membership(program_id, Method::LeaveGroup, accounts, group_id)
}

#[derive(Debug, Clone, Copy)]
pub struct DeletePostAccounts {
    pub user: Pubkey,
    pub user_id: Pubkey,
    pub post: Pubkey,
}

/// Build the instruction closing a post account.
pub fn ix_delete_post(
    program_id: &Pubkey,
    accounts: &DeletePostAccounts,
    group_id: u64,
    hash: &Pubkey,
) -> SocialResult<Instruction> {
    let data = encode(
        Method::DeletePost,
        &DeletePostArgs {
            group_id,
            hash: hash.to_bytes(),
        },
    )?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(accounts.user, true),
            AccountMeta::new_readonly(accounts.user_id, false),
            AccountMeta::new(accounts.post, false),
            AccountMeta::new_readonly(solana_program::system_program::id(), false),
        ],
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn membership() -> MembershipAccounts {
        MembershipAccounts {
            user: Pubkey::new_unique(),
            user_id: Pubkey::new_unique(),
            user_profile: Pubkey::new_unique(),
        }
    }

    #[test]
    fn leave_group_layout() {
        let program = Pubkey::new_unique();
        let accounts = membership();
        let ix = ix_leave_group(&program, &accounts, 5).unwrap();

        assert_eq!(ix.program_id, program);
        assert_eq!(ix.data.len(), 16);
        assert_eq!(Method::from_data(&ix.data), Some(Method::LeaveGroup));
        assert_eq!(&ix.data[8..], &5u64.to_le_bytes());

        assert!(ix.accounts[0].is_signer && ix.accounts[0].is_writable);
        assert_eq!(ix.accounts[1].pubkey, accounts.user_id);
        assert!(!ix.accounts[1].is_writable);
        assert_eq!(ix.accounts[2].pubkey, accounts.user_profile);
    }

    #[test]
    fn join_and_leave_differ_only_by_discriminator() {
        let program = Pubkey::new_unique();
        let accounts = membership();
        let join = ix_join_group(&program, &accounts, 9).unwrap();
        let leave = ix_leave_group(&program, &accounts, 9).unwrap();
        assert_ne!(join.data[..8], leave.data[..8]);
        assert_eq!(join.data[8..], leave.data[8..]);
        assert_eq!(join.accounts, leave.accounts);
    }

    #[test]
    fn delete_post_layout() {
        let program = Pubkey::new_unique();
        let hash = Pubkey::new_unique();
        let accounts = DeletePostAccounts {
            user: Pubkey::new_unique(),
            user_id: Pubkey::new_unique(),
            post: Pubkey::new_unique(),
        };
        let ix = ix_delete_post(&program, &accounts, 3, &hash).unwrap();

        assert_eq!(Method::from_data(&ix.data), Some(Method::DeletePost));
        assert_eq!(&ix.data[8..16], &3u64.to_le_bytes());
        assert_eq!(ix.data[16..], hash.to_bytes());
        assert_eq!(ix.accounts.len(), 4);
        assert_eq!(ix.accounts[3].pubkey, solana_program::system_program::id());
    }
}
