use crate::identity::Identity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Length of the random tail appended to generated identifiers.
const RANDOM_SUFFIX_LEN: usize = 11;

/// A stored paste, in the exact shape it is persisted under the `pastes` slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paste {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    // None marks a paste written before ownership existed
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "owner_or_none"
    )]
    pub owner: Option<String>,
}

impl Paste {
    /// Builds a freshly created paste owned by `owner`.
    pub fn new(id: String, title: String, content: String, owner: &Identity) -> Self {
        Self {
            id,
            title,
            content,
            created_at: Utc::now(),
            owner: Some(owner.as_str().to_string()),
        }
    }

    /// True only when the paste has an owner and it is `actor`.
    pub fn is_owned_by(&self, actor: &Identity) -> bool {
        self.owner.as_deref() == Some(actor.as_str())
    }

    /// Owned pastes are mutable by their owner only; owner-less pastes by anyone.
    pub fn is_mutable_by(&self, actor: &Identity) -> bool {
        match &self.owner {
            None => true,
            Some(owner) => owner == actor.as_str(),
        }
    }

    /// Case-insensitive substring match against the title.
    pub fn title_matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Input for creating a paste.
///
/// `id` is honored when present (the editor reuses ids it generated itself),
/// `created_at` is accepted for shape compatibility but never trusted.
#[derive(Debug, Clone, Default)]
pub struct PasteDraft {
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl PasteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// Input for updating an existing paste.
#[derive(Debug, Clone)]
pub struct PasteUpdate {
    pub id: String,
    pub title: String,
    pub content: String,
}

impl PasteUpdate {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Generates a paste id: base-36 millisecond clock followed by a random base-36 tail.
pub fn new_paste_id() -> String {
    format!(
        "{}{}",
        to_base36(Utc::now().timestamp_millis().max(0) as u128),
        random_base36()
    )
}

/// Random base-36 string of a fixed length.
pub(crate) fn random_base36() -> String {
    let mut digits = to_base36(Uuid::new_v4().as_u128());
    digits.truncate(RANDOM_SUFFIX_LEN);
    digits
}

pub(crate) fn to_base36(mut value: u128) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

fn owner_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let owner: Option<String> = Option::deserialize(deserializer)?;
    Ok(owner.filter(|o| !o.is_empty()))
}
