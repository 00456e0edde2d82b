//! Session Controller
//!
//! Mediates between "the user wants to run a script now" and "the serial
//! link may currently be busy acting as a live interactive terminal".
//!
//! The run operation reuses the interactive channel for transfer rather
//! than negotiating a separate binary protocol: each script line goes out
//! as one interpreter-input unit, in original order, with no
//! acknowledgement or flow control. The host does not wait for the device
//! to accept a line before sending the next. That trades reliability for a
//! simple device-side contract and is only suitable for small interactive
//! scripts.
//!
//! Callers must serialize `run` invocations; the controller holds no
//! internal queue and an in-flight line-send sequence cannot be cancelled.

use std::sync::Arc;

use super::transport::SerialTransport;
use super::{SerialSession, SessionState};
use crate::error::{Error, Result};
use crate::messages::{self, MessageSink};

/// Controller for the one serial session to the board
pub struct SessionController {
    transport: Box<dyn SerialTransport>,
    session: SerialSession,
    messages: Arc<dyn MessageSink>,
}

impl SessionController {
    /// Create a controller over an injected transport, starting idle
    pub fn new(transport: Box<dyn SerialTransport>, messages: Arc<dyn MessageSink>) -> Self {
        Self {
            transport,
            session: SerialSession::new(),
            messages,
        }
    }

    /// Current session state
    pub fn state(&self) -> SessionState {
        self.session.state
    }

    /// The session model
    pub fn session(&self) -> &SerialSession {
        &self.session
    }

    /// Toggle the REPL session on or off
    ///
    /// Idle: opens the transport and enters the interactive state. A failed
    /// open surfaces a connection message and leaves the session idle.
    /// Interactive: closes the transport and returns to idle.
    pub async fn toggle_repl(&mut self) -> Result<()> {
        match self.session.state {
            SessionState::Idle => self.open_session().await,
            SessionState::Interactive => self.close_session().await,
        }
    }

    /// Run a script on the board through the REPL
    ///
    /// `script` is the active editor buffer, or `None` when the user has no
    /// tab open. Lines are split on `\n` only; a trailing newline yields a
    /// trailing empty line which is sent as-is. If the session is idle the
    /// transport is opened first, exactly as the user-level REPL toggle
    /// would. If the link still is not interactive after that attempt, the
    /// script is not sent and no further error is raised; this no-op is
    /// deliberate (best effort, no retry).
    pub async fn run(&mut self, script: Option<&str>) -> Result<()> {
        let Some(text) = script else {
            let msg = messages::no_active_editor();
            self.messages.show(&msg);
            return Err(Error::NoActiveEditor);
        };

        info!("running script");
        let lines: Vec<&str> = text.split('\n').collect();

        if self.session.is_idle() {
            self.toggle_repl().await?;
        }

        if self.session.is_interactive() {
            self.send_lines(&lines).await?;
            debug!(lines = lines.len(), "script sent");
        } else {
            warn!("serial link not interactive after open attempt; script not sent");
        }
        Ok(())
    }

    /// Notify the controller that the device disconnected
    ///
    /// The host's device watcher calls this when the board is unplugged
    /// while a session is open.
    pub async fn on_disconnect(&mut self) {
        if self.session.is_interactive() {
            warn!(session = %self.session.id, "device disconnected, session dropped");
            let _ = self.transport.close().await;
            self.session.mark_idle();
        }
    }

    /// Send lines through the interactive channel, one write per line
    async fn send_lines(&mut self, lines: &[&str]) -> Result<()> {
        for line in lines {
            if let Err(e) = self.transport.write_line(line).await {
                // A failed write means the link is gone; no resume.
                warn!(error = %e, "write failed mid-script, dropping session");
                let _ = self.transport.close().await;
                self.session.mark_idle();
                return Err(e);
            }
        }
        Ok(())
    }

    async fn open_session(&mut self) -> Result<()> {
        if let Err(e) = self.transport.open().await {
            let err = match e {
                Error::ConnectionFailed { .. } => e,
                other => Error::ConnectionFailed {
                    port: self.transport.port_name().to_string(),
                    reason: other.to_string(),
                },
            };
            self.messages.show(&messages::connection_failed(&err));
            return Err(err);
        }
        if self.transport.is_open() {
            self.session.mark_interactive();
            info!(
                session = %self.session.id,
                port = self.transport.port_name(),
                "serial session opened"
            );
        }
        Ok(())
    }

    async fn close_session(&mut self) -> Result<()> {
        self.transport.close().await?;
        self.session.mark_idle();
        info!(session = %self.session.id, "serial session closed");
        Ok(())
    }
}
