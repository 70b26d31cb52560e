//! Content analysis card component
//!
//! Text input, submit control, and the cosmetic progress indicator shown
//! while a request is in flight.

use iced::widget::{Space, button, column, container, text, text_input};
use iced::{Element, Fill};

use crate::app::{Message, PanelState};
use crate::ui::{theme, widgets};

/// Build the analysis card
pub fn view(panel: &PanelState) -> Element<'_, Message> {
    let submitting = panel.is_submitting();

    let title = text("Content Analysis").size(18).style(|theme| text::Style {
        color: Some(theme::text_primary(theme)),
    });

    let description = text("Enter the text you want to analyze for potential harmful content")
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

    let input = text_input("Type or paste your content here...", &panel.input)
        .on_input(Message::InputChanged)
        .on_submit(Message::SubmitRequested)
        .padding(14)
        .size(15)
        .style(theme::analysis_input);

    let label = if submitting {
        "Analyzing..."
    } else {
        "Analyze Content"
    };
    let mut submit = button(container(text(label).size(16)).width(Fill).center_x(Fill))
        .width(Fill)
        .padding(14)
        .style(theme::primary_button);
    // Submitting disables the control; no cancellation of in-flight requests
    if !submitting {
        submit = submit.on_press(Message::SubmitRequested);
    }

    let mut content = column![
        title,
        Space::new().height(4),
        description,
        Space::new().height(16),
        input,
    ]
    .width(Fill);

    if submitting {
        // Cosmetic only; advances on a fixed timer, not on real request progress
        let progress = widgets::progress_track::view(panel.progress);

        let caption = container(text("Analyzing content...").size(12).style(|theme| {
            text::Style {
                color: Some(theme::text_muted(theme)),
            }
        }))
        .width(Fill)
        .center_x(Fill);

        content = content
            .push(Space::new().height(16))
            .push(progress)
            .push(Space::new().height(6))
            .push(caption);
    }

    content = content.push(Space::new().height(20)).push(submit);

    container(content)
        .width(Fill)
        .padding(24)
        .style(theme::card)
        .into()
}
