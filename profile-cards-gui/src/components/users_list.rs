use iced::{
    Element,
    Length::Fill,
    Padding,
    widget::{Column, center, column, scrollable, text},
};
use profile_cards_lib::{ListScreen, ProfileId, ProfileStore};

use crate::components::{app_bar::app_bar, profile_card::profile_card};

#[derive(Debug, Clone)]
pub enum Message {
    ProfileSelected(ProfileId),
}

/// Action used for communicating with the parent component
#[derive(Debug)]
pub enum Action {
    ShowDetails(ProfileId),
}

pub struct UsersList {
    screen: ListScreen,
}

impl UsersList {
    pub fn new(store: &ProfileStore) -> Self {
        // The store never changes, so the rows are rendered once
        Self {
            screen: ListScreen::render(store.profiles()),
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::ProfileSelected(id) => Action::ShowDetails(id),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = if self.screen.rows.is_empty() {
            center(text("No users")).into()
        } else {
            let cards = self
                .screen
                .rows
                .iter()
                .map(|row| profile_card(row, Message::ProfileSelected(row.id)));

            let cards = Column::with_children(cards)
                .padding(Padding {
                    bottom: 8.0,
                    ..Padding::ZERO
                })
                .width(Fill);

            scrollable(cards).height(Fill).into()
        };

        column![app_bar(self.screen.title(), "home", None), body]
            .height(Fill)
            .into()
    }

    pub fn screen(&self) -> &ListScreen {
        &self.screen
    }
}

#[cfg(test)]
mod test {
    use profile_cards_lib::Profile;

    use super::*;

    #[test]
    fn test_selection_shows_details() {
        let store = ProfileStore::new(vec![
            Profile::new(0, "Alice", "alice.png", true),
            Profile::new(1, "Bob", "bob.png", false),
        ])
        .unwrap();
        let mut list = UsersList::new(&store);

        assert_eq!(list.screen().rows.len(), 2);
        assert!(matches!(
            list.update(Message::ProfileSelected(1.into())),
            Action::ShowDetails(id) if *id == 1
        ));
    }
}
