//! In-memory collaborators shared by the flow tests.
//!
//! Both fakes append to one event log so tests can assert the relative order
//! of fetches, deletions and submissions.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use solana_program::instruction::Instruction;
use solana_program::pubkey::Pubkey;
use solana_sdk::signature::Signature;

use shdw_social_client::accounts::{PostAccount, ProgramAccount, UserIdAccount, UserProfileAccount};
use shdw_social_client::{
    default_program_id, derive_user_id, derive_user_profile, file_url, FileStorage, Ledger, SocialClient,
    SocialError, SocialResult, StorageVersion, SHADOW_DRIVE_DOMAIN,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Fetch(Pubkey),
    Send(Instruction),
    GetFile(String),
    Delete { storage_account: String, url: String },
}

pub type EventLog = Arc<Mutex<Vec<Event>>>;

pub struct FakeLedger {
    pub wallet: Pubkey,
    pub accounts: Mutex<HashMap<Pubkey, Vec<u8>>>,
    pub fail_send: bool,
    pub events: EventLog,
}

impl Ledger for FakeLedger {
    fn wallet(&self) -> Pubkey {
        self.wallet
    }

    async fn fetch_account_data(&self, address: &Pubkey) -> SocialResult<Vec<u8>> {
        self.events.lock().unwrap().push(Event::Fetch(*address));
        self.accounts
            .lock()
            .unwrap()
            .get(address)
            .cloned()
            .ok_or(SocialError::AccountNotFound(*address))
    }

    async fn send_instruction(&self, instruction: Instruction) -> SocialResult<Signature> {
        self.events.lock().unwrap().push(Event::Send(instruction));
        if self.fail_send {
            return Err(SocialError::Signing("blockhash not found".to_string()));
        }
        Ok(Signature::new_unique())
    }
}

pub struct FakeStorage {
    pub files: Mutex<HashMap<String, Vec<u8>>>,
    pub fail_delete: HashSet<String>,
    pub events: EventLog,
}

impl FileStorage for FakeStorage {
    async fn get_file(&self, url: &str) -> SocialResult<Vec<u8>> {
        self.events.lock().unwrap().push(Event::GetFile(url.to_string()));
        self.files
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| SocialError::storage(url, "http status 404 Not Found"))
    }

    async fn delete_file(&self, storage_account: &str, url: &str, version: StorageVersion) -> SocialResult<()> {
        assert_eq!(version, StorageVersion::V2);
        self.events.lock().unwrap().push(Event::Delete {
            storage_account: storage_account.to_string(),
            url: url.to_string(),
        });
        if self.fail_delete.contains(url) {
            return Err(SocialError::storage(url, "http status 500 Internal Server Error"));
        }
        self.files.lock().unwrap().remove(url);
        Ok(())
    }
}

/// A registered user with a storage account.
#[derive(Debug, Clone, Copy)]
pub struct TestUser {
    pub wallet: Pubkey,
    pub uid: u64,
    pub shdw: Pubkey,
}

impl TestUser {
    pub fn new(uid: u64) -> Self {
        Self {
            wallet: Pubkey::new_unique(),
            uid,
            shdw: Pubkey::new_unique(),
        }
    }

    pub fn user_id_pda(&self) -> Pubkey {
        derive_user_id(&default_program_id(), &self.wallet).0
    }

    pub fn profile_pda(&self) -> Pubkey {
        derive_user_profile(&default_program_id(), self.uid).0
    }

    pub fn url(&self, name: &str) -> String {
        file_url(SHADOW_DRIVE_DOMAIN, &self.shdw.to_string(), name)
    }
}

pub struct World {
    pub ledger_accounts: HashMap<Pubkey, Vec<u8>>,
    pub files: HashMap<String, Vec<u8>>,
    pub fail_delete: HashSet<String>,
    pub fail_send: bool,
}

impl World {
    pub fn new() -> Self {
        Self {
            ledger_accounts: HashMap::new(),
            files: HashMap::new(),
            fail_delete: HashSet::new(),
            fail_send: false,
        }
    }

    pub fn register(&mut self, user: &TestUser) -> &mut Self {
        let id = UserIdAccount { uid: user.uid, bump: 255 };
        let profile = UserProfileAccount {
            timestamp: 1_650_000_000,
            uid: user.uid,
            public_key: user.wallet,
            shdw: user.shdw,
            bump: 254,
        };
        self.ledger_accounts.insert(user.user_id_pda(), id.encode().unwrap());
        self.ledger_accounts.insert(user.profile_pda(), profile.encode().unwrap());
        self
    }

    /// Store a post account plus its manifest in the author's storage.
    pub fn publish(&mut self, author: &TestUser, gid: u64, manifest: serde_json::Value) -> Pubkey {
        let post = Pubkey::new_unique();
        let account = PostAccount {
            timestamp: 1_660_000_000,
            uid: author.uid,
            gid,
            bump: 253,
        };
        self.ledger_accounts.insert(post, account.encode().unwrap());
        self.files
            .insert(author.url(&format!("{post}.json")), serde_json::to_vec(&manifest).unwrap());
        post
    }

    pub fn client(self, caller: &TestUser) -> (SocialClient<FakeLedger, FakeStorage>, EventLog) {
        let events: EventLog = Arc::new(Mutex::new(Vec::new()));
        let ledger = FakeLedger {
            wallet: caller.wallet,
            accounts: Mutex::new(self.ledger_accounts),
            fail_send: self.fail_send,
            events: events.clone(),
        };
        let storage = FakeStorage {
            files: Mutex::new(self.files),
            fail_delete: self.fail_delete,
            events: events.clone(),
        };
        let client = SocialClient::new(default_program_id(), SHADOW_DRIVE_DOMAIN, ledger, storage);
        (client, events)
    }
}

pub fn sends(events: &EventLog) -> Vec<Instruction> {
    events
        .lock()
        .unwrap()
        .iter()
        .filter_map(|e| match e {
            Event::Send(ix) => Some(ix.clone()),
            _ => None,
        })
        .collect()
}

pub fn deleted_urls(events: &EventLog) -> Vec<String> {
    events
        .lock()
        .unwrap()
        .iter()
        .filter_map(|e| match e {
            Event::Delete { url, .. } => Some(url.clone()),
            _ => None,
        })
        .collect()
}
