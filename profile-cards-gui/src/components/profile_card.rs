//! The building blocks shared by both screens: the card, the round avatar and the name/status
//! block.

use iced::{
    Alignment, Border, Color, Element,
    Length::Fill,
    Padding, Shadow, Theme, Vector,
    widget::{button, column, container, row, text},
};
use profile_cards_lib::{OnlineStatus, ProfileSummary};

const CARD_BACKGROUND: Color = Color::from_rgb(0.733, 0.525, 0.988);
const CARD_BACKGROUND_HOVERED: Color = Color::from_rgb(0.800, 0.620, 1.0);
const ONLINE: Color = Color::from_rgb(0.0, 0.8, 0.0);
const OFFLINE: Color = Color::from_rgb(0.8, 0.8, 0.8);

/// A clickable summary row for the users list.
pub fn profile_card<'a, Message>(
    summary: &ProfileSummary,
    on_press: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let content = row![
        profile_picture(summary, 72.0),
        profile_content(summary, Alignment::Start),
    ]
    .width(Fill)
    .align_y(Alignment::Center);

    container(
        button(content)
            .width(Fill)
            .padding(0)
            .style(card_style)
            .on_press(on_press),
    )
    .padding(Padding {
        top: 8.0,
        right: 8.0,
        bottom: 0.0,
        left: 8.0,
    })
    .into()
}

/// Round avatar placeholder ringed by the online status color.
///
/// The picture reference itself is not fetched; the avatar shows the profile's initials.
pub fn profile_picture<'a, Message: 'a>(
    summary: &ProfileSummary,
    size: f32,
) -> Element<'a, Message> {
    let ring = match summary.status {
        OnlineStatus::Active => ONLINE,
        OnlineStatus::Offline => OFFLINE,
    };

    container(
        container(
            text(initials(&summary.name))
                .size(size * 0.4)
                .color(Color::WHITE),
        )
        .center(size)
        .style(move |_theme| container::Style {
            background: Some(CARD_BACKGROUND.scale_alpha(0.6).into()),
            border: Border {
                color: ring,
                width: 2.0,
                radius: (size / 2.0).into(),
            },
            shadow: Shadow {
                color: Color::BLACK.scale_alpha(0.3),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
            ..container::Style::default()
        }),
    )
    .padding(10)
    .into()
}

/// Name and status text, aligned as requested.
pub fn profile_content<'a, Message: 'a>(
    summary: &ProfileSummary,
    alignment: Alignment,
) -> Element<'a, Message> {
    column![
        text(summary.name.clone()).size(32),
        text(summary.status.to_string()).size(14),
    ]
    .padding(8)
    .align_x(alignment)
    .into()
}

fn card_style(theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => CARD_BACKGROUND_HOVERED,
        button::Status::Active | button::Status::Disabled => CARD_BACKGROUND,
    };

    button::Style {
        background: Some(background.into()),
        text_color: theme.palette().text,
        border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: Color::BLACK.scale_alpha(0.3),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 10.0,
        },
        ..button::Style::default()
    }
}

/// Up to two uppercase initials, one per word of `name`.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
