//! Framework-agnostic screen presenters.
//!
//! Each screen is a pure function of its inputs producing a plain description of what to show.
//! Frontends turn these descriptions into widgets or text.

use tracing::info;

use crate::{
    Error,
    lookup::ProfileLookup,
    profile::{OnlineStatus, Profile, ProfileId},
    route::Route,
    store::ProfileStore,
};

pub const USERS_LIST_TITLE: &str = "Users List";
pub const USER_DETAILS_TITLE: &str = "Users Profile Details";

/// What a profile card shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSummary {
    pub id: ProfileId,
    pub name: String,
    pub picture: String,
    pub status: OnlineStatus,
}

impl From<&Profile> for ProfileSummary {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id(),
            name: profile.name().to_string(),
            picture: profile.picture().to_string(),
            status: profile.status(),
        }
    }
}

/// One row per profile, in store order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListScreen {
    pub rows: Vec<ProfileSummary>,
}

impl ListScreen {
    pub fn render(profiles: &[Profile]) -> Self {
        Self {
            rows: profiles.iter().map(ProfileSummary::from).collect(),
        }
    }

    pub fn title(&self) -> &'static str {
        USERS_LIST_TITLE
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailScreen {
    Found(ProfileSummary),
    NotFound(ProfileId),
}

impl DetailScreen {
    /// Resolve `profile_id` and describe the detail screen for it.
    ///
    /// A missing profile produces [`DetailScreen::NotFound`] instead of an error.
    pub fn render<L>(lookup: &L, profile_id: ProfileId) -> Self
    where
        L: ProfileLookup + ?Sized,
    {
        match lookup.find(profile_id) {
            Ok(profile) => Self::Found(profile.into()),
            Err(Error::NotFound(id)) => {
                info!("Profile {id} does not exist, showing not found screen");
                Self::NotFound(id)
            }
            Err(e) => {
                info!("Failed to resolve profile {profile_id}: {e}");
                Self::NotFound(profile_id)
            }
        }
    }

    pub fn title(&self) -> &'static str {
        USER_DETAILS_TITLE
    }
}

/// The presenter output for whichever route is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    List(ListScreen),
    Detail(DetailScreen),
}

impl Screen {
    pub fn for_route(route: Route, store: &ProfileStore) -> Self {
        match route {
            Route::List => Self::List(ListScreen::render(store.profiles())),
            Route::Detail { profile_id } => Self::Detail(DetailScreen::render(store, profile_id)),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::List(screen) => screen.title(),
            Screen::Detail(screen) => screen.title(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::router::Router;

    fn store() -> ProfileStore {
        ProfileStore::new(vec![
            Profile::new(0, "Alice", "alice.png", true),
            Profile::new(1, "Bob", "bob.png", false),
        ])
        .unwrap()
    }

    #[test]
    fn test_list_rows_in_order() {
        let screen = ListScreen::render(store().profiles());

        let rows: Vec<_> = screen
            .rows
            .iter()
            .map(|row| (*row.id, row.name.as_str(), row.status.to_string()))
            .collect();
        assert_eq!(
            rows,
            [
                (0, "Alice", "Active Now".to_string()),
                (1, "Bob", "Offline".to_string())
            ]
        );
        assert_eq!(screen.title(), "Users List");
    }

    #[test]
    fn test_empty_list() {
        assert!(ListScreen::render(&[]).rows.is_empty());
    }

    #[test]
    fn test_detail_found() {
        let screen = DetailScreen::render(&store(), 0.into());

        let DetailScreen::Found(summary) = screen else {
            panic!("expected a profile, got {screen:?}");
        };
        assert_eq!(summary.name, "Alice");
        assert_eq!(summary.status.to_string(), "Active Now");
        assert_eq!(summary.picture, "alice.png");
    }

    #[test]
    fn test_detail_not_found() {
        assert_eq!(
            DetailScreen::render(&store(), 99.into()),
            DetailScreen::NotFound(99.into())
        );
    }

    #[test]
    fn test_select_then_back() {
        let store = store();
        let mut router = Router::new();
        let initial = Screen::for_route(router.current(), &store);

        let Screen::List(list) = &initial else {
            panic!("expected the list screen");
        };
        let selected = list.rows.first().unwrap().id;
        router.navigate_to_detail(selected);

        let detail = Screen::for_route(router.current(), &store);
        assert_eq!(
            detail,
            Screen::Detail(DetailScreen::Found(ProfileSummary {
                id: 0.into(),
                name: "Alice".into(),
                picture: "alice.png".into(),
                status: OnlineStatus::Active,
            }))
        );
        assert_eq!(detail.title(), "Users Profile Details");

        router.navigate_back();
        assert_eq!(Screen::for_route(router.current(), &store), initial);
    }

    #[test]
    fn test_route_to_missing_profile_renders_not_found() {
        let store = store();
        let mut router = Router::new();

        router.navigate_to_detail(99.into());

        assert_eq!(
            Screen::for_route(router.current(), &store),
            Screen::Detail(DetailScreen::NotFound(99.into()))
        );
    }
}
