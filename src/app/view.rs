// src/app/view.rs
//! Application view rendering

use iced::widget::{Space, column, container, scrollable, stack};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::{components, effects, widgets};

impl App {
    /// Build the application view
    pub fn view(&self) -> Element<'_, Message> {
        // Full-viewport animated background behind everything else
        let background = effects::dot_grid::view(&self.ui.background, self.ui.pointer);

        let mut content = column![
            components::hero::view(),
            components::analysis_card::view(&self.panel),
        ]
        .spacing(28)
        .max_width(860)
        .width(Fill);

        if let Some(error) = &self.panel.error {
            content = content.push(components::error_banner::view(error));
        }

        if let Some(result) = &self.panel.result {
            content = content.push(components::result_card::view(result));
        }

        let page = scrollable(container(content).width(Fill).center_x(Fill).padding(40))
            .width(Fill)
            .height(Fill);

        // Toast overlay (empty space if not visible)
        let toast_overlay: Element<'_, Message> = if self.ui.toast_visible {
            if let Some(toast) = &self.ui.toast {
                container(widgets::view_toast(toast))
                    .width(Fill)
                    .padding(20)
                    .align_x(Alignment::Center)
                    .into()
            } else {
                Space::new().width(0).height(0).into()
            }
        } else {
            Space::new().width(0).height(0).into()
        };

        stack![background, page, toast_overlay]
            .width(Fill)
            .height(Fill)
            .into()
    }
}
