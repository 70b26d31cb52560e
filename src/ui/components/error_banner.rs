//! Error banner component
//! Generic failure notice shown in place of a result

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::ui::theme;

/// Build the error banner
pub fn view(message: &str) -> Element<'_, Message> {
    let header = row![
        text("✗").size(14).style(|theme| text::Style {
            color: Some(theme::danger(theme)),
        }),
        Space::new().width(8),
        text("Error").size(14).style(|theme| text::Style {
            color: Some(theme::danger(theme)),
        }),
    ]
    .align_y(Alignment::Center);

    let body = text(message.to_string())
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    container(column![header, Space::new().height(6), body])
        .width(Fill)
        .padding(16)
        .style(theme::error_banner)
        .into()
}
