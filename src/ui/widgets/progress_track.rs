//! Determinate progress track widget
//!
//! A thin horizontal bar filled left to right, built from plain containers.
//! Purely presentational; the value is whatever the caller says it is.

use iced::widget::{Space, container, row};
use iced::{Background, Border, Element, Fill, Length, Theme};

use crate::ui::theme;

/// Bar thickness in pixels
const GIRTH: f32 = 8.0;

/// Build a progress track filled to `value` percent (0-100)
pub fn view<'a, Message: 'a>(value: u8) -> Element<'a, Message> {
    let filled = u16::from(value.min(100));
    let rest = 100 - filled;

    let fill = container(Space::new().width(Fill).height(GIRTH)).style(|_theme: &Theme| {
        container::Style {
            background: Some(Background::Color(theme::ACCENT)),
            border: Border {
                radius: (GIRTH / 2.0).into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    let track = container(Space::new().width(Fill).height(GIRTH)).style(|theme: &Theme| {
        container::Style {
            background: Some(Background::Color(theme::surface_container(theme))),
            border: Border {
                radius: (GIRTH / 2.0).into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    // FillPortion(0) is not a meaningful layout factor, so the edges render
    // a single segment
    if filled == 0 {
        return track.width(Fill).into();
    }
    if rest == 0 {
        return fill.width(Fill).into();
    }

    row![
        fill.width(Length::FillPortion(filled)),
        track.width(Length::FillPortion(rest)),
    ]
    .spacing(2)
    .width(Fill)
    .into()
}
