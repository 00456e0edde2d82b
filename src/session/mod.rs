//! Serial Session Management
//!
//! Owns the state machine governing the one serial link to the board. The
//! link is either idle (nothing open) or interactive (a live REPL session).
//! Script transfer is not a third state: it is a sequence of writes
//! performed *through* the interactive channel, so the device never has to
//! distinguish typed input from transferred input.

pub mod controller;
pub mod transport;

pub use controller::SessionController;
pub use transport::{MockTransport, SerialPortTransport, SerialTransport};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// State of the serial session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No serial session open
    #[default]
    Idle,
    /// A session is open and the transport carries live REPL interaction
    Interactive,
}

/// One logical connection to a device's interactive interpreter
///
/// At most one `SerialSession` exists per active device connection; the
/// transport handle behind it has exactly one logical writer.
#[derive(Debug, Clone)]
pub struct SerialSession {
    /// Session identifier
    pub id: String,
    /// Current session state
    pub state: SessionState,
    /// When the transport was last opened
    pub opened_at: Option<DateTime<Utc>>,
}

impl SerialSession {
    /// Create a new, idle session
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            state: SessionState::Idle,
            opened_at: None,
        }
    }

    /// Mark the session as interactive (transport is open)
    pub fn mark_interactive(&mut self) {
        self.state = SessionState::Interactive;
        self.opened_at = Some(Utc::now());
    }

    /// Mark the session as idle (transport closed or lost)
    pub fn mark_idle(&mut self) {
        self.state = SessionState::Idle;
        self.opened_at = None;
    }

    /// Check if the session is idle
    pub fn is_idle(&self) -> bool {
        matches!(self.state, SessionState::Idle)
    }

    /// Check if the session is interactive
    pub fn is_interactive(&self) -> bool {
        matches!(self.state, SessionState::Interactive)
    }
}

impl Default for SerialSession {
    fn default() -> Self {
        Self::new()
    }
}
