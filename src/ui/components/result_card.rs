//! Moderation result card component
//!
//! Renders the verdict headline, per-category findings for unsafe content,
//! the confidence readout, and the completion timestamp.

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Element, Fill};

use crate::api::{CategoryDetail, ModerationResult};
use crate::app::Message;
use crate::ui::theme;
use crate::utils::{format_confidence, format_timestamp};

/// Build the result card for a completed moderation request
pub fn view(result: &ModerationResult) -> Element<'_, Message> {
    let safe = result.status.is_safe();

    let (icon, headline) = if safe {
        ("✓", "Content is Safe")
    } else {
        ("⚠", "Potentially Harmful Content Detected")
    };

    let header = row![
        text(icon).size(20).style(move |theme| text::Style {
            color: Some(if safe {
                theme::success(theme)
            } else {
                theme::danger(theme)
            }),
        }),
        Space::new().width(10),
        text(headline).size(18).style(move |theme| text::Style {
            color: Some(if safe {
                theme::success(theme)
            } else {
                theme::danger(theme)
            }),
        }),
    ]
    .align_y(Alignment::Center);

    let mut content = column![header].width(Fill);

    if !safe && !result.details.is_empty() {
        let mut findings = column![].spacing(8).width(Fill);
        for detail in &result.details {
            findings = findings.push(category_card(detail));
        }

        content = content
            .push(Space::new().height(16))
            .push(
                text("Detected Categories:")
                    .size(14)
                    .style(|theme| text::Style {
                        color: Some(theme::danger(theme)),
                    }),
            )
            .push(Space::new().height(8))
            .push(findings);
    }

    let confidence = row![
        text("Confidence: ").size(13).style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        }),
        text(format_confidence(result.confidence()))
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            }),
    ]
    .align_y(Alignment::Center);

    let completed_at = text(format!(
        "Analysis completed at: {}",
        format_timestamp(&result.timestamp)
    ))
    .size(12)
    .style(|theme| text::Style {
        color: Some(theme::text_muted(theme)),
    });

    content = content
        .push(Space::new().height(16))
        .push(confidence)
        .push(Space::new().height(8))
        .push(completed_at);

    container(content)
        .width(Fill)
        .padding(24)
        .style(theme::card)
        .into()
}

/// One violated category with its description
fn category_card(detail: &CategoryDetail) -> Element<'_, Message> {
    let title = text(detail.category.clone())
        .size(14)
        .style(|theme| text::Style {
            color: Some(theme::danger(theme)),
        });

    let description = text(detail.description.clone())
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    container(column![title, Space::new().height(4), description])
        .width(Fill)
        .padding(14)
        .style(theme::category_card)
        .into()
}
