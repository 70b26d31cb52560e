//! Application messages

use crate::api::ModerationResult;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Panel ============
    /// Input text edited
    InputChanged(String),
    /// Submit control activated
    SubmitRequested,
    /// Moderation request finished (sequence number, outcome)
    ///
    /// The error side carries the transport detail for logging; the panel
    /// itself only ever displays the generic failure message.
    ModerationCompleted(u64, Result<ModerationResult, String>),
    /// Cosmetic progress advance while a request is in flight
    ProgressTick,

    // ============ Background ============
    /// Display refresh; triggers a redraw of the glow background
    AnimationTick,
    /// Pointer moved (viewport coordinates)
    PointerMoved(iced::Point),
    /// Window resized
    WindowResized(iced::Size),

    // ============ Service ============
    /// Startup health probe finished
    HealthChecked(Result<(), String>),

    // ============ Toast ============
    /// Hide toast notification
    HideToast,
}
