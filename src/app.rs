//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

pub use message::Message;
pub use state::{App, CoreState, INITIAL_WINDOW_SIZE, PanelState, RequestLifecycle, UiState};

use state::PROGRESS_INTERVAL_MS;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first so the client gets the configured address
        let settings = crate::features::Settings::load();
        let client = crate::api::ModerationClient::new(settings.service.base_url.clone());
        tracing::info!("Moderation service at {}", client.base_url());

        let app = Self {
            core: CoreState { settings, client: client.clone() },
            panel: PanelState::default(),
            ui: UiState::new(),
        };

        // 2. Probe the service so a dead backend is reported up front
        let init_task = Task::perform(
            async move { client.health().await.map_err(|e| e.to_string()) },
            Message::HealthChecked,
        );

        (app, init_task)
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Dynamic window title based on the request lifecycle
    pub fn title(&self) -> String {
        if self.panel.is_submitting() {
            "Guardian - Analyzing...".to_string()
        } else {
            "Guardian - Content Moderation".to_string()
        }
    }

    /// Subscriptions for the background animation, progress timer, and input events
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::time::Duration;

        // Check if power saving mode is enabled
        let power_saving = self.core.settings.display.power_saving_mode;

        // 1. Per-frame redraw of the glow background (vsync rate, disabled in
        //    power saving mode)
        let frames_sub = if subscription_logic::needs_frame_subscription(power_saving) {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 2. Cosmetic progress counter while a request is in flight (100ms)
        let progress_sub =
            if subscription_logic::needs_progress_subscription(self.panel.is_submitting()) {
                iced::time::every(Duration::from_millis(PROGRESS_INTERVAL_MS))
                    .map(|_| Message::ProgressTick)
            } else {
                iced::Subscription::none()
            };

        // 3. Window resize regenerates the dot grid
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        // 4. Pointer position feeding the glow effect
        let pointer_sub = iced::event::listen().filter_map(|event| match event {
            iced::Event::Mouse(iced::mouse::Event::CursorMoved { position }) => {
                Some(Message::PointerMoved(position))
            }
            _ => None,
        });

        iced::Subscription::batch([frames_sub, progress_sub, resize_sub, pointer_sub])
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_frame_subscription(power_saving: bool) -> bool {
        !power_saving
    }

    pub fn needs_progress_subscription(is_submitting: bool) -> bool {
        is_submitting
    }

    pub fn subscription_decisions(power_saving: bool, is_submitting: bool) -> (bool, bool) {
        (
            needs_frame_subscription(power_saving),
            needs_progress_subscription(is_submitting),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    #[test]
    fn frames_run_for_the_lifetime_of_the_view() {
        // The decorative background animates whether or not a request is
        // outstanding
        let (needs_frames, needs_progress) = subscription_decisions(false, false);
        assert!(needs_frames, "Background must animate while idle");
        assert!(!needs_progress, "No progress timer while idle");
    }

    #[test]
    fn progress_timer_only_while_submitting() {
        let (needs_frames, needs_progress) = subscription_decisions(false, true);
        assert!(needs_frames, "Background keeps animating during a request");
        assert!(needs_progress, "Progress timer must run while submitting");
    }

    #[test]
    fn power_saving_freezes_frames_but_not_progress() {
        let (needs_frames, needs_progress) = subscription_decisions(true, true);
        assert!(!needs_frames, "Power saving disables the background");
        assert!(
            needs_progress,
            "Progress timer is independent of power saving"
        );
    }

    #[test]
    fn subscriptions_are_independent() {
        // Frame decision must not depend on the request lifecycle
        assert_eq!(
            needs_frame_subscription(false),
            subscription_decisions(false, true).0
        );
        // Progress decision must not depend on power saving
        assert_eq!(
            needs_progress_subscription(true),
            subscription_decisions(true, true).1
        );
    }
}
