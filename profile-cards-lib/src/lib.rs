//! Core of the profile cards application.
//!
//! Holds the immutable [`ProfileStore`], the id lookup over it, the [`Router`] back-stack and the
//! pure screen presenters that both the GUI and the CLI render from.

pub mod fs;
pub mod lookup;
pub mod profile;
pub mod route;
pub mod router;
pub mod screen;
pub mod store;

pub use lookup::ProfileLookup;
pub use profile::{OnlineStatus, Profile, ProfileId};
pub use route::{Route, RouteError};
pub use router::Router;
pub use screen::{DetailScreen, ListScreen, ProfileSummary, Screen};
pub use store::ProfileStore;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No profile with id {0}")]
    NotFound(ProfileId),
    #[error("Profile id {0} is used more than once")]
    DuplicateId(ProfileId),
    #[error("Profile {0} has an empty name")]
    EmptyName(ProfileId),
    #[error("Failed to parse profile dataset: {0}")]
    Dataset(#[from] toml::de::Error),
}
