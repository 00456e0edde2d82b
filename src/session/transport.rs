//! Serial Transport
//!
//! The session controller never touches a serial port directly; it talks to
//! an injected [`SerialTransport`] capability. The production implementation
//! wraps the `serialport` crate; tests inject [`MockTransport`], which
//! records every line it is asked to send.
//!
//! A transport carries exactly one logical writer. The controller owns its
//! transport exclusively, so writes are never interleaved mid-line.

use async_trait::async_trait;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{Error, Result};

/// Byte-stream capability used by the session controller
///
/// One logical interpreter-input unit is written per `write_line` call;
/// implementations must not batch or reorder lines.
#[async_trait]
pub trait SerialTransport: Send {
    /// Open the underlying byte stream
    async fn open(&mut self) -> Result<()>;

    /// Close the underlying byte stream
    async fn close(&mut self) -> Result<()>;

    /// Send one line to the device's interpreter
    async fn write_line(&mut self, line: &str) -> Result<()>;

    /// Whether the byte stream is currently open
    fn is_open(&self) -> bool;

    /// Name of the port this transport is bound to
    fn port_name(&self) -> &str;
}

/// Production transport over a `serialport` device
pub struct SerialPortTransport {
    port_name: String,
    baud_rate: u32,
    open_timeout: Duration,
    port: Option<Box<dyn serialport::SerialPort>>,
}

impl SerialPortTransport {
    /// Create a transport bound to a port, not yet opened
    pub fn new(port_name: impl Into<String>, baud_rate: u32, open_timeout_ms: u64) -> Self {
        Self {
            port_name: port_name.into(),
            baud_rate,
            open_timeout: Duration::from_millis(open_timeout_ms),
            port: None,
        }
    }
}

#[async_trait]
impl SerialTransport for SerialPortTransport {
    async fn open(&mut self) -> Result<()> {
        if self.port.is_some() {
            return Ok(());
        }
        let port = serialport::new(self.port_name.as_str(), self.baud_rate)
            .timeout(self.open_timeout)
            .open()
            .map_err(|e| Error::ConnectionFailed {
                port: self.port_name.clone(),
                reason: e.to_string(),
            })?;
        debug!(port = %self.port_name, baud = self.baud_rate, "serial port opened");
        self.port = Some(port);
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        if self.port.take().is_some() {
            debug!(port = %self.port_name, "serial port closed");
        }
        Ok(())
    }

    async fn write_line(&mut self, line: &str) -> Result<()> {
        let port = self.port.as_mut().ok_or(Error::TransportClosed)?;
        let write = |port: &mut Box<dyn serialport::SerialPort>| -> std::io::Result<()> {
            // The MicroPython REPL treats CR as end-of-input.
            port.write_all(line.as_bytes())?;
            port.write_all(b"\r")?;
            port.flush()
        };
        write(port).map_err(|e| Error::WriteFailed {
            reason: e.to_string(),
        })
    }

    fn is_open(&self) -> bool {
        self.port.is_some()
    }

    fn port_name(&self) -> &str {
        &self.port_name
    }
}

/// Shared state behind a [`MockTransport`] and its clones
#[derive(Debug, Default)]
struct MockState {
    lines: Mutex<Vec<String>>,
    open_calls: AtomicUsize,
    is_open: Mutex<bool>,
}

/// Recording test double for [`SerialTransport`]
///
/// Clones share the same recorded state, so a test can keep a handle while
/// the controller owns the boxed transport.
#[derive(Debug, Default, Clone)]
pub struct MockTransport {
    state: Arc<MockState>,
    /// When set, `open` fails with a connection error
    pub fail_open: bool,
    /// When set, `open` returns Ok but the transport stays closed
    pub open_stays_closed: bool,
    /// When set, `write_line` fails
    pub fail_writes: bool,
}

impl MockTransport {
    /// Create a well-behaved mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines sent so far, in send order
    pub fn sent_lines(&self) -> Vec<String> {
        self.state.lines.lock().expect("mock lock poisoned").clone()
    }

    /// Number of times `open` was called
    pub fn open_calls(&self) -> usize {
        self.state.open_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SerialTransport for MockTransport {
    async fn open(&mut self) -> Result<()> {
        self.state.open_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_open {
            return Err(Error::ConnectionFailed {
                port: self.port_name().to_string(),
                reason: "mock open failure".to_string(),
            });
        }
        if !self.open_stays_closed {
            *self.state.is_open.lock().expect("mock lock poisoned") = true;
        }
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        *self.state.is_open.lock().expect("mock lock poisoned") = false;
        Ok(())
    }

    async fn write_line(&mut self, line: &str) -> Result<()> {
        if !self.is_open() {
            return Err(Error::TransportClosed);
        }
        if self.fail_writes {
            return Err(Error::WriteFailed {
                reason: "mock write failure".to_string(),
            });
        }
        self.state
            .lines
            .lock()
            .expect("mock lock poisoned")
            .push(line.to_string());
        Ok(())
    }

    fn is_open(&self) -> bool {
        *self.state.is_open.lock().expect("mock lock poisoned")
    }

    fn port_name(&self) -> &str {
        "mock"
    }
}
