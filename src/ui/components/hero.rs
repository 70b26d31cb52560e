//! Hero header component
//! App title and tagline shown above the analysis panel

use iced::widget::{Space, column, row, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::ui::theme;

/// Build the hero header
pub fn view() -> Element<'static, Message> {
    let title = row![
        text("🛡").size(36).style(|_theme| text::Style {
            color: Some(theme::ACCENT_SOFT),
        }),
        Space::new().width(14),
        text("Content Guardian").size(40).style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        }),
    ]
    .align_y(Alignment::Center);

    let tagline = text(
        "Llama Guard analyzes text for potentially harmful content \
         across 13 categories in real time.",
    )
    .size(16)
    .style(|theme| text::Style {
        color: Some(theme::text_secondary(theme)),
    });

    column![title, Space::new().height(10), tagline]
        .align_x(Alignment::Center)
        .width(Fill)
        .into()
}
