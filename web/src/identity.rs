//! The stored user record: how the navbar decodes it and how it is
//! displayed.

use leptos::logging;
use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

/// localStorage key holding the serialized user record.
pub const USER_KEY: &str = "user";

/// Secondary label shown when the user has no nickname.
pub const FALLBACK_SUBTITLE: &str = "Health Warrior";

/// Avatar glyph shown when the record carries none.
pub const DEFAULT_AVATAR: &str = "💪";

/// Minimal identity shape the navbar depends on.
///
/// The record is written elsewhere in the app and may carry extra profile
/// fields; this component only reads the three below, and only ever
/// removes the record (on logout), never writes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl UserRecord {
    /// Preferred display name: the nickname when present, otherwise the
    /// name.
    pub fn primary_label(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.name)
    }

    /// Line under the primary label: the real name when a nickname covers
    /// it, otherwise the fixed fallback. The desktop block and the mobile
    /// panel must both resolve through here.
    pub fn secondary_label(&self) -> &str {
        if self.nickname.is_some() {
            &self.name
        } else {
            FALLBACK_SUBTITLE
        }
    }

    pub fn avatar_glyph(&self) -> &str {
        self.avatar.as_deref().unwrap_or(DEFAULT_AVATAR)
    }
}

/// Outcome of decoding the persisted user entry. Decoding is separated
/// from policy so the malformed case stays observable.
#[derive(Debug)]
pub enum StoredUser {
    Present(UserRecord),
    Absent,
    Malformed(serde_json::Error),
}

impl StoredUser {
    pub fn decode(raw: Option<&str>) -> Self {
        match raw {
            None => StoredUser::Absent,
            Some(text) => match serde_json::from_str(text) {
                Ok(record) => StoredUser::Present(record),
                Err(err) => StoredUser::Malformed(err),
            },
        }
    }
}

/// Reads the current user from the store, once, at mount.
///
/// Policy: a corrupt or unreadable record is treated as "no user" so the
/// widget never blocks render on store state. Both cases log a warning.
pub fn load_current_user(store: &impl KeyValueStore) -> Option<UserRecord> {
    let raw = match store.get(USER_KEY) {
        Ok(raw) => raw,
        Err(err) => {
            logging::warn!("navbar: failed to read stored user: {err}");
            return None;
        }
    };

    match StoredUser::decode(raw.as_deref()) {
        StoredUser::Present(record) => Some(record),
        StoredUser::Absent => None,
        StoredUser::Malformed(err) => {
            logging::warn!("navbar: stored user record is malformed, treating as logged out: {err}");
            None
        }
    }
}
