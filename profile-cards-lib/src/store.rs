use std::{collections::HashSet, sync::Arc};

use serde::Deserialize;
use tracing::debug;

use crate::{Error, Result, profile::Profile};

const BUILTIN_DATASET: &str = include_str!("../data/profiles.toml");

#[derive(Deserialize)]
struct Dataset {
    #[serde(default)]
    profiles: Vec<Profile>,
}

/// The fixed, ordered collection of [`Profile`]s the application shows.
///
/// Built once by the composition root and handed to whoever needs it. Cloning is cheap and every
/// clone observes the same data, which never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileStore {
    profiles: Arc<[Profile]>,
}

impl ProfileStore {
    /// Build a store from an ordered list of profiles.
    ///
    /// Ids must be unique and names non-empty.
    pub fn new(profiles: Vec<Profile>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(profiles.len());

        for profile in &profiles {
            if profile.name().trim().is_empty() {
                return Err(Error::EmptyName(profile.id()));
            }
            if !seen.insert(profile.id()) {
                return Err(Error::DuplicateId(profile.id()));
            }
        }

        debug!("Created profile store with {} profiles", profiles.len());

        Ok(Self {
            profiles: profiles.into(),
        })
    }

    /// Parse a store from a TOML document made of `[[profiles]]` tables.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let dataset: Dataset = toml::from_str(contents)?;
        Self::new(dataset.profiles)
    }

    /// The dataset that ships with the application.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_DATASET)
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for ProfileStore {
    /// An empty store.
    fn default() -> Self {
        Self {
            profiles: Vec::new().into(),
        }
    }
}
