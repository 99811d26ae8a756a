use derive_more::{Deref, Display, From};
use serde::{Deserialize, Serialize};
use strum::Display as StrumDisplay;

/// Identifier of a [`Profile`], unique within a [`ProfileStore`](crate::ProfileStore).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Deref, Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct ProfileId(i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum OnlineStatus {
    #[strum(to_string = "Active Now")]
    Active,
    #[strum(to_string = "Offline")]
    Offline,
}

impl From<bool> for OnlineStatus {
    fn from(online: bool) -> Self {
        if online { Self::Active } else { Self::Offline }
    }
}

/// A single user as shown on a profile card.
///
/// Profiles are plain immutable records; nothing in the application creates, edits or removes
/// them after the store is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    id: ProfileId,
    name: String,
    /// Opaque avatar reference handed to the renderer as-is
    picture: String,
    online: bool,
}

impl Profile {
    pub fn new(id: i32, name: impl Into<String>, picture: impl Into<String>, online: bool) -> Self {
        Self {
            id: ProfileId(id),
            name: name.into(),
            picture: picture.into(),
            online,
        }
    }

    pub fn id(&self) -> ProfileId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn picture(&self) -> &str {
        &self.picture
    }

    pub fn status(&self) -> OnlineStatus {
        self.online.into()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(OnlineStatus::Active.to_string(), "Active Now");
        assert_eq!(OnlineStatus::Offline.to_string(), "Offline");
    }

    #[test]
    fn test_status_follows_online_flag() {
        let alice = Profile::new(0, "Alice", "https://example.com/alice.jpg", true);
        let bob = Profile::new(1, "Bob", "https://example.com/bob.jpg", false);

        assert_eq!(alice.status(), OnlineStatus::Active);
        assert_eq!(bob.status(), OnlineStatus::Offline);
    }

    #[test]
    fn test_id_displays_as_integer() {
        assert_eq!(ProfileId::from(-3).to_string(), "-3");
        assert_eq!(*ProfileId::from(7), 7);
    }
}
