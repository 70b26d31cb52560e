// src/app/state.rs
//! Application state definitions

use iced::{Point, Size};

use crate::api::{ModerationClient, ModerationResult};
use crate::ui::effects::DotGrid;
use crate::ui::widgets::Toast;

/// Window size before the first resize event arrives
pub const INITIAL_WINDOW_SIZE: Size = Size::new(1100.0, 780.0);

/// Progress counter step per tick (cosmetic)
pub const PROGRESS_STEP: u8 = 5;

/// Progress tick interval in milliseconds (cosmetic)
pub const PROGRESS_INTERVAL_MS: u64 = 100;

/// The one user-facing message for every request failure
pub const GENERIC_ERROR: &str = "Failed to analyze content. Please try again.";

/// Main application state
pub struct App {
    /// Core infrastructure (Settings, service client)
    pub core: CoreState,
    /// Moderation panel state machine
    pub panel: PanelState,
    /// UI state (toast, background effect)
    pub ui: UiState,
}

/// Core Infrastructure & Services
pub struct CoreState {
    pub settings: crate::features::Settings,
    pub client: ModerationClient,
}

/// Lifecycle of the moderation request panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestLifecycle {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Moderation panel state
///
/// Owns the input text, the request lifecycle, and the displayed outcome.
/// At most one result is displayed at a time; a new submission clears the
/// previous result and error before the request resolves.
#[derive(Debug, Default)]
pub struct PanelState {
    pub input: String,
    pub lifecycle: RequestLifecycle,
    /// Display-only progress counter (0-100), decoupled from real progress
    pub progress: u8,
    pub result: Option<ModerationResult>,
    pub error: Option<String>,
    /// Sequence number of the most recently dispatched request
    ///
    /// Completions are tagged with the sequence they belong to; anything but
    /// the latest is discarded, so a superseded request can never overwrite
    /// a newer result.
    request_seq: u64,
}

impl PanelState {
    /// Start a new submission, returning its sequence number
    ///
    /// Rejected with `None` when the trimmed input is empty; the panel is
    /// left untouched and no request must be dispatched.
    pub fn begin_submission(&mut self) -> Option<u64> {
        if self.input.trim().is_empty() {
            return None;
        }

        self.result = None;
        self.error = None;
        self.progress = 0;
        self.lifecycle = RequestLifecycle::Submitting;
        self.request_seq += 1;
        Some(self.request_seq)
    }

    /// Apply a request completion
    ///
    /// Returns `false` when `seq` is not the latest dispatched request; the
    /// completion is then stale and the panel is left untouched. A failure
    /// stores the generic user-facing message, never the transport detail.
    pub fn complete(&mut self, seq: u64, outcome: Result<ModerationResult, String>) -> bool {
        if seq != self.request_seq {
            return false;
        }

        self.progress = 0;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
                self.lifecycle = RequestLifecycle::Succeeded;
            }
            Err(_) => {
                self.result = None;
                self.error = Some(GENERIC_ERROR.to_string());
                self.lifecycle = RequestLifecycle::Failed;
            }
        }
        true
    }

    /// Advance the cosmetic progress counter, capped at 100
    pub fn tick_progress(&mut self) {
        if self.lifecycle == RequestLifecycle::Submitting {
            self.progress = self.progress.saturating_add(PROGRESS_STEP).min(100);
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.lifecycle == RequestLifecycle::Submitting
    }
}

/// UI View State
pub struct UiState {
    pub toast: Option<Toast>,
    pub toast_visible: bool,

    /// Dot grid backing the animated background
    pub background: DotGrid,
    /// Last observed pointer position, read by the background draw pass
    pub pointer: Point,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            toast: None,
            toast_visible: false,
            // Sized for the initial window; replaced on the first resize event
            background: DotGrid::new(INITIAL_WINDOW_SIZE.width, INITIAL_WINDOW_SIZE.height),
            pointer: Point::ORIGIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CategoryDetail, ModerationStatus};

    fn safe_result() -> ModerationResult {
        ModerationResult {
            input: "What a beautiful day".to_string(),
            status: ModerationStatus::Safe,
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            violated_categories: Vec::new(),
            details: Vec::new(),
            confidence_score: None,
        }
    }

    fn unsafe_result() -> ModerationResult {
        ModerationResult {
            input: "I want to hurt someone".to_string(),
            status: ModerationStatus::Unsafe,
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            violated_categories: vec!["violence".to_string()],
            details: vec![CategoryDetail {
                category: "Violence".to_string(),
                description: "Content suggests intent to harm".to_string(),
            }],
            confidence_score: None,
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        let mut panel = PanelState::default();
        assert_eq!(panel.begin_submission(), None);
        assert_eq!(panel.lifecycle, RequestLifecycle::Idle);
    }

    #[test]
    fn whitespace_input_is_rejected_and_state_untouched() {
        let mut panel = PanelState::default();
        panel.input = "hello".to_string();
        let seq = panel.begin_submission().unwrap();
        assert!(panel.complete(seq, Ok(safe_result())));

        // A rejected resubmission must not clear the previous outcome
        panel.input = "   \t\n".to_string();
        assert_eq!(panel.begin_submission(), None);
        assert_eq!(panel.lifecycle, RequestLifecycle::Succeeded);
        assert!(panel.result.is_some());
    }

    #[test]
    fn submission_clears_previous_result_and_error() {
        let mut panel = PanelState::default();
        panel.input = "first".to_string();
        let seq = panel.begin_submission().unwrap();
        panel.complete(seq, Err("503".to_string()));
        assert!(panel.error.is_some());

        panel.input = "second".to_string();
        let seq = panel.begin_submission().unwrap();
        assert_eq!(panel.lifecycle, RequestLifecycle::Submitting);
        assert!(panel.result.is_none());
        assert!(panel.error.is_none());
        assert_eq!(panel.progress, 0);
        assert!(seq > 1);
    }

    #[test]
    fn success_reaches_succeeded_with_result() {
        let mut panel = PanelState::default();
        panel.input = "What a beautiful day".to_string();
        let seq = panel.begin_submission().unwrap();

        assert!(panel.complete(seq, Ok(safe_result())));
        assert_eq!(panel.lifecycle, RequestLifecycle::Succeeded);
        let result = panel.result.as_ref().unwrap();
        assert!(result.status.is_safe());
        assert_eq!(result.confidence(), 0.95);
        assert!(panel.error.is_none());
    }

    #[test]
    fn unsafe_success_keeps_findings() {
        let mut panel = PanelState::default();
        panel.input = "I want to hurt someone".to_string();
        let seq = panel.begin_submission().unwrap();

        assert!(panel.complete(seq, Ok(unsafe_result())));
        let result = panel.result.as_ref().unwrap();
        assert!(!result.status.is_safe());
        assert_eq!(result.details.len(), 1);
        assert_eq!(result.confidence(), 0.85);
    }

    #[test]
    fn failure_reaches_failed_with_generic_message() {
        let mut panel = PanelState::default();
        panel.input = "hello".to_string();
        let seq = panel.begin_submission().unwrap();

        assert!(panel.complete(seq, Err("service responded with 500".to_string())));
        assert_eq!(panel.lifecycle, RequestLifecycle::Failed);
        assert!(panel.result.is_none());
        assert_eq!(panel.error.as_deref(), Some(GENERIC_ERROR));
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut panel = PanelState::default();
        panel.input = "first".to_string();
        let old_seq = panel.begin_submission().unwrap();

        panel.input = "second".to_string();
        let new_seq = panel.begin_submission().unwrap();

        // The superseded request resolves after the newer one was dispatched
        assert!(!panel.complete(old_seq, Ok(safe_result())));
        assert_eq!(panel.lifecycle, RequestLifecycle::Submitting);
        assert!(panel.result.is_none());

        assert!(panel.complete(new_seq, Ok(unsafe_result())));
        assert_eq!(panel.lifecycle, RequestLifecycle::Succeeded);
    }

    #[test]
    fn progress_advances_by_step_and_caps() {
        let mut panel = PanelState::default();
        panel.input = "hello".to_string();
        panel.begin_submission().unwrap();

        panel.tick_progress();
        assert_eq!(panel.progress, 5);

        for _ in 0..40 {
            panel.tick_progress();
        }
        assert_eq!(panel.progress, 100);
    }

    #[test]
    fn progress_is_frozen_outside_submitting() {
        let mut panel = PanelState::default();
        panel.tick_progress();
        assert_eq!(panel.progress, 0);

        panel.input = "hello".to_string();
        let seq = panel.begin_submission().unwrap();
        panel.tick_progress();
        panel.complete(seq, Ok(safe_result()));
        assert_eq!(panel.progress, 0);

        panel.tick_progress();
        assert_eq!(panel.progress, 0);
    }
}
