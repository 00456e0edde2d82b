//! Configuration management for boardlink
//!
//! TOML-based configuration covering the serial device settings, session
//! timeouts, and the mode's capability flags, with loading/saving and
//! validation handled by [`loader::ConfigLoader`].

pub mod loader;

use serde::{Deserialize, Serialize};

use crate::board::BoardId;

/// Main configuration structure for boardlink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Serial device configuration
    #[serde(default)]
    pub device: DeviceConfig,

    /// Session configuration
    #[serde(default)]
    pub session: SessionConfig,

    /// Mode capability flags
    #[serde(default)]
    pub capabilities: Capabilities,
}

/// Serial device configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Serial port to use; `None` leaves selection to device discovery
    pub port: Option<String>,

    /// Baud rate for the REPL connection
    pub baud_rate: u32,

    /// Board identities recognized in addition to the built-in catalog
    #[serde(default)]
    pub extra_boards: Vec<BoardId>,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            port: None,
            baud_rate: 115_200,
            extra_boards: Vec::new(),
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Timeout for opening the transport, in milliseconds
    pub open_timeout_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            open_timeout_ms: 1000,
        }
    }
}

/// Capability flags for the mode
///
/// The mode ships in two variants: one with both a run action and the REPL
/// toggle, and one with only the toggle. The flag selects between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Whether the run action is offered
    pub run_action: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self { run_action: true }
    }
}
