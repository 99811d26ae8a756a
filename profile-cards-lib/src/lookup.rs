use tracing::trace;

use crate::{
    Error, Result,
    profile::{Profile, ProfileId},
    store::ProfileStore,
};

/// Resolves a [`ProfileId`] to the profile it names.
pub trait ProfileLookup {
    /// Return the profile with the given id, or [`Error::NotFound`] if there is none.
    fn find(&self, id: ProfileId) -> Result<&Profile>;
}

impl ProfileLookup for [Profile] {
    fn find(&self, id: ProfileId) -> Result<&Profile> {
        trace!("Looking up profile {id}");

        self.iter()
            .find(|profile| profile.id() == id)
            .ok_or(Error::NotFound(id))
    }
}

impl ProfileLookup for ProfileStore {
    fn find(&self, id: ProfileId) -> Result<&Profile> {
        self.profiles().find(id)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn store() -> ProfileStore {
        ProfileStore::new(vec![
            Profile::new(0, "Alice", "alice.png", true),
            Profile::new(1, "Bob", "bob.png", false),
        ])
        .unwrap()
    }

    #[test]
    fn test_find_every_profile() {
        let store = ProfileStore::builtin().unwrap();

        for profile in store.profiles() {
            assert_eq!(store.find(profile.id()).unwrap(), profile);
        }
    }

    #[test]
    fn test_find() {
        let store = store();

        assert_eq!(store.find(1.into()).unwrap().name(), "Bob");
    }

    #[test]
    fn test_not_found() {
        let store = store();

        for id in [-1, 2, 99, i32::MAX] {
            assert!(matches!(
                store.find(id.into()),
                Err(Error::NotFound(missing)) if *missing == id
            ));
        }
    }

    #[test]
    fn test_find_in_slice() {
        let profiles = vec![Profile::new(3, "Carol", "carol.png", true)];

        assert_eq!(profiles.as_slice().find(3.into()).unwrap().name(), "Carol");
        assert!(profiles.as_slice().find(0.into()).is_err());
    }
}
