//! Views built from fetched remote data.
//!
//! Views are read once per call and never persisted.

use serde::{Deserialize, Deserializer, Serialize};
use solana_program::pubkey::Pubkey;

use crate::accounts::{PostAccount, UserProfileAccount};
use crate::constants::POST_MANIFEST_EXT;

/// A post account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Post {
    #[serde(serialize_with = "display")]
    pub public_key: Pubkey,
    pub group_id: u64,
    pub user_id: u64,
    pub timestamp: i64,
}

impl Post {
    pub fn new(public_key: Pubkey, account: &PostAccount) -> Self {
        Self {
            public_key,
            group_id: account.gid,
            user_id: account.uid,
            timestamp: account.timestamp,
        }
    }

    /// Name of the post manifest in the author's storage account.
    pub fn manifest_name(&self) -> String {
        format!("{}{POST_MANIFEST_EXT}", self.public_key)
    }
}

/// A user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct User {
    /// Wallet owning the profile.
    #[serde(serialize_with = "display")]
    pub public_key: Pubkey,
    pub user_id: u64,
    /// Storage account holding the user's files.
    #[serde(serialize_with = "display")]
    pub shdw: Pubkey,
}

impl From<&UserProfileAccount> for User {
    fn from(profile: &UserProfileAccount) -> Self {
        Self {
            public_key: profile.public_key,
            user_id: profile.uid,
            shdw: profile.shdw,
        }
    }
}

/// A media attachment listed in a post manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMedia {
    #[serde(default)]
    pub mime_type: String,
    pub file: String,
}

/// Post manifest stored as `<post>.json` in the author's storage account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostFileData {
    /// Creation timestamp as written by the uploader. Seeds the post hash,
    /// so it is kept verbatim.
    #[serde(deserialize_with = "string_or_number")]
    pub timestamp: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub media: Vec<PostMedia>,
}

impl PostFileData {
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// File names to delete for `post`, content first and manifest last.
    pub fn deletion_order(&self, post: &Post) -> Vec<String> {
        let mut names = Vec::with_capacity(self.media.len() + 2);
        if let Some(text) = &self.text {
            names.push(text.clone());
        }
        names.extend(self.media.iter().map(|m| m.file.clone()));
        names.push(post.manifest_name());
        names
    }
}

fn display<S: serde::Serializer>(key: &Pubkey, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(key)
}

fn string_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
        Uint(u64),
    }

    Ok(match Raw::deserialize(d)? {
        Raw::Str(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Uint(n) => n.to_string(),
    })
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<PostMedia>, D::Error> {
    Ok(Option::<Vec<PostMedia>>::deserialize(d)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Post {
        Post {
            public_key: Pubkey::new_unique(),
            group_id: 1,
            user_id: 2,
            timestamp: 3,
        }
    }

    #[test]
    fn manifest_accepts_numeric_timestamp() {
        let data = PostFileData::from_slice(br#"{"timestamp": 1660000000}"#).unwrap();
        assert_eq!(data.timestamp, "1660000000");
        assert!(data.text.is_none());
        assert!(data.media.is_empty());
    }

    #[test]
    fn manifest_ignores_unknown_fields() {
        let raw = br#"{
            "timestamp": "1660000000",
            "text": null,
            "media": [{"mimeType": "image/png", "file": "a.png"}],
            "groupId": "4",
            "userId": "9"
        }"#;
        let data = PostFileData::from_slice(raw).unwrap();
        assert_eq!(data.media[0].mime_type, "image/png");
        assert!(data.text.is_none());
    }

    #[test]
    fn manifest_null_media_is_empty() {
        let data = PostFileData::from_slice(br#"{"timestamp": "1", "text": "t.txt", "media": null}"#).unwrap();
        assert!(data.media.is_empty());
        assert_eq!(data.text.as_deref(), Some("t.txt"));
    }

    #[test]
    fn manifest_requires_timestamp() {
        assert!(PostFileData::from_slice(br#"{"text": "t.txt"}"#).is_err());
    }

    #[test]
    fn deletion_order_puts_manifest_last() {
        let p = post();
        let data = PostFileData {
            timestamp: "1".into(),
            text: Some("t.txt".into()),
            media: vec![
                PostMedia { mime_type: "image/png".into(), file: "a.png".into() },
                PostMedia { mime_type: "video/mp4".into(), file: "b.mp4".into() },
            ],
        };
        assert_eq!(
            data.deletion_order(&p),
            vec!["t.txt".to_string(), "a.png".into(), "b.mp4".into(), p.manifest_name()]
        );
    }

    #[test]
    fn deletion_order_without_content() {
        let p = post();
        let data = PostFileData { timestamp: "1".into(), text: None, media: vec![] };
        assert_eq!(data.deletion_order(&p), vec![format!("{}.json", p.public_key)]);
    }

    #[test]
    fn views_serialize_keys_as_base58() {
        let p = post();
        let v = serde_json::to_value(p).unwrap();
        assert_eq!(v["public_key"], p.public_key.to_string());
    }
}
