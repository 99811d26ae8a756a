use iced::{
    Alignment, Color, Element,
    Length::Fill,
    widget::{button, container, row, text},
};

use crate::icons::icon;

const BACKGROUND: Color = Color::from_rgb(1.0, 0.0, 1.0);

/// Top bar with a leading icon and a title. The icon only reacts to presses when
/// `on_icon_press` is set.
pub fn app_bar<'a, Message>(
    title: &'a str,
    icon_name: &str,
    on_icon_press: Option<Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    container(
        row![
            button(icon(icon_name))
                .style(button::text)
                .on_press_maybe(on_icon_press),
            text(title).size(22).color(Color::WHITE),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding([12, 12])
    .width(Fill)
    .style(|_theme| container::Style {
        background: Some(BACKGROUND.into()),
        ..container::Style::default()
    })
    .into()
}
