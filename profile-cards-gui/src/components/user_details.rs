use iced::{
    Alignment, Element,
    Length::Fill,
    widget::{column, container, text},
};
use profile_cards_lib::{DetailScreen, ProfileId, ProfileStore};

use crate::components::{
    app_bar::app_bar,
    profile_card::{profile_content, profile_picture},
};

#[derive(Debug, Clone)]
pub enum Message {
    BackPressed,
}

/// Action used for communicating with the parent component
#[derive(Debug)]
pub enum Action {
    Back,
}

pub struct UserDetails {
    screen: DetailScreen,
}

impl UserDetails {
    pub fn new(store: &ProfileStore, profile_id: ProfileId) -> Self {
        Self {
            screen: DetailScreen::render(store, profile_id),
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::BackPressed => Action::Back,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = match &self.screen {
            DetailScreen::Found(summary) => column![
                profile_picture(summary, 240.0),
                profile_content(summary, Alignment::Center),
            ]
            .align_x(Alignment::Center)
            .width(Fill)
            .into(),
            DetailScreen::NotFound(id) => column![
                text("Profile not found").size(28),
                text(format!("There is no user with id {id}")),
            ]
            .spacing(8)
            .align_x(Alignment::Center)
            .width(Fill)
            .into(),
        };

        column![
            app_bar(self.screen.title(), "arrow_back", Some(Message::BackPressed)),
            container(body).padding(16).width(Fill),
        ]
        .height(Fill)
        .into()
    }

    pub fn screen(&self) -> &DetailScreen {
        &self.screen
    }
}
