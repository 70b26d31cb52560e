//! Toast visibility handlers

use std::time::Duration;

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::widgets::Toast;

/// How long a toast stays on screen, in seconds
const TOAST_SECS: u64 = 4;

impl App {
    pub(super) fn handle_toast(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::HideToast => {
                self.ui.toast_visible = false;
                Some(Task::none())
            }
            _ => None,
        }
    }

    /// Show a toast and schedule its dismissal
    pub(super) fn show_toast(&mut self, toast: Toast) -> Task<Message> {
        self.ui.toast = Some(toast);
        self.ui.toast_visible = true;

        Task::perform(
            async {
                tokio::time::sleep(Duration::from_secs(TOAST_SECS)).await;
            },
            |_| Message::HideToast,
        )
    }
}
