use iced::{Element, Task, Theme, application};
use profile_cards_lib::{ProfileStore, Route, Router};
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::{
    components::{
        user_details::{self, UserDetails},
        users_list::{self, UsersList},
    },
    config::GuiConfig,
};

pub mod components;
pub mod config;
pub mod icons;

fn main() -> iced::Result {
    // Human friendly panicking in release mode
    human_panic::setup_panic!();

    // Logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let cfg = GuiConfig::load();
    let store = ProfileStore::builtin().unwrap_or_else(|e| {
        error!("Built-in profiles are unusable, starting with none: {e}");
        ProfileStore::default()
    });
    info!("Starting with {} profiles", store.len());

    application(
        move || App::new(store.clone(), &cfg),
        App::update,
        App::view,
    )
    .theme(App::theme)
    .title(App::title)
    .run()
}

#[derive(Debug, Clone)]
enum Message {
    UsersList(users_list::Message),
    UserDetails(user_details::Message),
}

struct App {
    theme: Theme,
    store: ProfileStore,
    router: Router,
    // Components
    users_list: UsersList,
    user_details: Option<UserDetails>,
}

impl App {
    pub fn new(store: ProfileStore, cfg: &GuiConfig) -> (Self, Task<Message>) {
        (
            Self {
                theme: cfg.theme(),
                users_list: UsersList::new(&store),
                user_details: None,
                router: Router::new(),
                store,
            },
            Task::none(),
        )
    }

    // Update application state based on messages passed by view()
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // Redirect messages to relevant child components
            Message::UsersList(msg) => match self.users_list.update(msg) {
                users_list::Action::ShowDetails(id) => {
                    self.router.navigate_to_detail(id);
                    self.route_changed();
                }
            },
            Message::UserDetails(msg) => {
                let Some(details) = &mut self.user_details else {
                    return Task::none();
                };

                match details.update(msg) {
                    user_details::Action::Back => {
                        if self.router.navigate_back() {
                            self.route_changed();
                        }
                    }
                }
            }
        }

        Task::none()
    }

    // Render the current route and pass along messages from components to update()
    pub fn view(&self) -> Element<'_, Message> {
        match &self.user_details {
            Some(details) => details.view().map(Message::UserDetails),
            None => self.users_list.view().map(Message::UsersList),
        }
    }

    pub fn title(&self) -> String {
        let screen = match &self.user_details {
            Some(details) => details.screen().title(),
            None => self.users_list.screen().title(),
        };

        format!("Profile Cards - {screen}")
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    /// Rebuild the detail component so it matches the router's current route.
    fn route_changed(&mut self) {
        self.user_details = match self.router.current() {
            Route::List => None,
            Route::Detail { profile_id } => Some(UserDetails::new(&self.store, profile_id)),
        };
    }
}

#[cfg(test)]
mod test {
    use profile_cards_lib::{DetailScreen, Profile};

    use super::*;

    fn app() -> App {
        let store = ProfileStore::new(vec![
            Profile::new(0, "Alice", "alice.png", true),
            Profile::new(1, "Bob", "bob.png", false),
        ])
        .unwrap();

        App::new(store, &GuiConfig::default()).0
    }

    fn select(app: &mut App, id: i32) {
        let _ = app.update(Message::UsersList(users_list::Message::ProfileSelected(
            id.into(),
        )));
    }

    fn back(app: &mut App) {
        let _ = app.update(Message::UserDetails(user_details::Message::BackPressed));
    }

    #[test]
    fn test_starts_at_list() {
        let app = app();

        assert_eq!(app.router.current(), Route::List);
        assert!(app.user_details.is_none());
        assert_eq!(app.title(), "Profile Cards - Users List");
    }

    #[test]
    fn test_select_then_back() {
        let mut app = app();

        select(&mut app, 0);
        assert_eq!(app.router.current(), Route::detail(0));
        assert!(matches!(
            app.user_details.as_ref().map(UserDetails::screen),
            Some(DetailScreen::Found(summary)) if summary.name == "Alice"
        ));
        assert_eq!(app.title(), "Profile Cards - Users Profile Details");

        back(&mut app);
        assert_eq!(app.router.current(), Route::List);
        assert!(app.user_details.is_none());
    }

    #[test]
    fn test_one_back_per_press() {
        let mut app = app();

        select(&mut app, 0);
        select(&mut app, 1);
        back(&mut app);

        assert_eq!(app.router.depth(), 2);
        assert_eq!(app.router.current(), Route::detail(0));
    }

    #[test]
    fn test_back_on_list_is_ignored() {
        let mut app = app();

        back(&mut app);

        assert_eq!(app.router.depth(), 1);
        assert_eq!(app.router.current(), Route::List);
    }

    #[test]
    fn test_missing_profile_shows_not_found() {
        let mut app = app();

        select(&mut app, 99);

        assert_eq!(
            app.user_details.as_ref().map(UserDetails::screen),
            Some(&DetailScreen::NotFound(99.into()))
        );
    }

    #[test]
    fn test_theme_from_config() {
        let cfg = GuiConfig {
            theme: config::Theme::Dark,
        };
        let (app, _) = App::new(ProfileStore::default(), &cfg);

        assert_eq!(app.theme(), Theme::Dark);
    }
}
