//! Moderation panel message handlers

use iced::Task;
use tracing::{debug, error, info, warn};

use crate::app::message::Message;
use crate::app::state::{App, GENERIC_ERROR};
use crate::ui::widgets::Toast;

impl App {
    /// Handle panel and service related messages
    pub(super) fn handle_panel(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::InputChanged(value) => {
                self.panel.input = value.clone();
                Some(Task::none())
            }

            Message::SubmitRequested => {
                let Some(seq) = self.panel.begin_submission() else {
                    debug!("Rejected submission: empty input");
                    return Some(
                        self.show_toast(Toast::error("Please enter some text to moderate")),
                    );
                };

                let client = self.core.client.clone();
                let text = self.panel.input.clone();
                debug!("Dispatching moderation request #{}", seq);

                Some(Task::perform(
                    async move { client.moderate(&text).await.map_err(|e| e.to_string()) },
                    move |outcome| Message::ModerationCompleted(seq, outcome),
                ))
            }

            Message::ModerationCompleted(seq, outcome) => {
                if let Err(e) = outcome {
                    error!("Moderation request #{} failed: {}", seq, e);
                }

                if !self.panel.complete(*seq, outcome.clone()) {
                    debug!("Discarding superseded moderation response #{}", seq);
                    return Some(Task::none());
                }

                let toast = match &self.panel.result {
                    Some(result) if result.status.is_safe() => {
                        Toast::success("No harmful content detected")
                    }
                    Some(_) => Toast::warning("Potentially harmful content detected"),
                    None => Toast::error(GENERIC_ERROR),
                };
                Some(self.show_toast(toast))
            }

            Message::ProgressTick => {
                self.panel.tick_progress();
                Some(Task::none())
            }

            Message::HealthChecked(result) => {
                match result {
                    Ok(()) => {
                        info!("Moderation service is reachable");
                        Some(Task::none())
                    }
                    Err(e) => {
                        warn!("Moderation service health check failed: {}", e);
                        Some(self.show_toast(Toast::error("Moderation service is unreachable")))
                    }
                }
            }

            _ => None,
        }
    }
}
