//! User-Facing Messages
//!
//! Failures in this crate are local and user-visible, never fatal. Each one
//! is reported as a short title plus a longer explanatory body, surfaced
//! through a host-provided [`MessageSink`]. The host decides how to render
//! them (dialog, status bar, log pane); this module only owns the texts.

use crate::error::Error;

/// A user-facing message with a short title and explanatory detail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessage {
    /// Short, one-line summary
    pub title: String,
    /// Longer explanation of what happened and what to do about it
    pub detail: String,
}

impl UserMessage {
    /// Create a new user message
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
        }
    }
}

/// Host-provided display surface for user messages
pub trait MessageSink: Send + Sync {
    /// Surface a message to the user
    fn show(&self, message: &UserMessage);
}

/// Message for a run invocation with no active editor buffer
pub fn no_active_editor() -> UserMessage {
    UserMessage::new(
        "Cannot run anything without any active editor tabs.",
        "Running transfers the content of the current tab onto the device. \
         It seems like you don't have any tabs open.",
    )
}

/// Message for a serial connection that could not be opened
pub fn connection_failed(err: &Error) -> UserMessage {
    UserMessage::new(
        "Could not connect to the device.",
        format!(
            "The serial connection to the board could not be opened: {}. \
             Check the USB cable and that no other program is using the port.",
            err
        ),
    )
}

/// Message for a file name that shadows a runtime-builtin module
pub fn reserved_name(name: &str) -> UserMessage {
    UserMessage::new(
        "Invalid file name for this device.",
        format!(
            "'{}' is the name of a module built into the device's runtime. \
             Saving your file with that name would shadow the built-in module \
             on import. Please choose a different name.",
            name
        ),
    )
}

/// A sink that drops every message
///
/// Useful as a default for embedding contexts with no display surface.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl MessageSink for NullSink {
    fn show(&self, _message: &UserMessage) {}
}
