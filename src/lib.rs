//! boardlink - board identification and script-to-REPL transfer
//!
//! This library provides the device-session core for a MicroPython editor:
//! it recognizes connected boards by their USB identity, keeps user file
//! names from shadowing runtime-builtin modules, and moves a buffered
//! script into the board's interactive interpreter over a serial link.
//!
//! ## Features
//!
//! - **Board identity:** Immutable (vendor ID, product ID) registry with
//!   exact-match lookup for device discovery
//! - **Name guarding:** Case-sensitive check of source-file base names
//!   against the runtime's built-in module names
//! - **Session control:** Idle/Interactive state machine over an injected
//!   serial transport, with the run operation streaming script lines
//!   through the live REPL channel
//! - **Configuration:** TOML-based configuration files
//!
//! ## Module Organization
//!
//! - [`board`] - Board identity registry
//! - [`reserved`] - Reserved runtime module names
//! - [`session`] - Session state machine, controller, and transports
//! - [`mode`] - Mode descriptor and action list
//! - [`messages`] - User-facing message texts and the display seam
//! - [`config`] - Configuration loading and validation
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use boardlink::{MessageSink, SerialPortTransport, SessionController, UserMessage};
//!
//! struct StatusBar;
//! impl MessageSink for StatusBar {
//!     fn show(&self, message: &UserMessage) {
//!         eprintln!("{}: {}", message.title, message.detail);
//!     }
//! }
//!
//! # async fn demo() -> boardlink::Result<()> {
//! let transport = SerialPortTransport::new("/dev/ttyACM0", 115_200, 1000);
//! let mut controller = SessionController::new(Box::new(transport), Arc::new(StatusBar));
//! controller.run(Some("print('hello board')\n")).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency model
//!
//! One logical writer per transport. The controller owns its transport
//! exclusively and `run` streams its lines as an uninterruptible sequence;
//! the host serializes user-triggered runs (e.g. by disabling the control
//! while one is in flight). The controller holds no internal queue.

#[macro_use]
extern crate tracing;

pub mod board;
pub mod config;
pub mod error;
pub mod messages;
pub mod mode;
pub mod reserved;
pub mod session;

// Re-exports for core functionality
pub use board::{BoardId, BoardRegistry};
pub use config::{Capabilities, Config};
pub use error::{Error, Result};
pub use messages::{MessageSink, NullSink, UserMessage};
pub use mode::{Action, BoardMode};
pub use reserved::ReservedNames;
pub use session::{
    MockTransport, SerialPortTransport, SerialSession, SerialTransport, SessionController,
    SessionState,
};

// Convenience re-exports for common types
pub use config::loader::ConfigLoader;

/// The current version of boardlink from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The crate name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize boardlink with default settings
///
/// Loads configuration from the default search locations, falling back to
/// defaults when no file is found or the file cannot be read.
///
/// # Errors
///
/// Returns an error only when a configuration file exists but fails
/// validation; a missing or unreadable file falls back to defaults.
pub fn init() -> Result<Config> {
    info!("initializing {} v{}", NAME, VERSION);

    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(Error::ConfigValidationFailed { field, reason }) => {
            return Err(Error::ConfigValidationFailed { field, reason });
        }
        Err(e) => {
            warn!("failed to load configuration: {}; using defaults", e);
            Config::default()
        }
    };

    info!(
        baud = config.device.baud_rate,
        run_action = config.capabilities.run_action,
        "configuration ready"
    );
    Ok(config)
}

/// Initialize boardlink from a specific configuration file
pub fn init_with_config(config_path: &std::path::Path) -> Result<Config> {
    info!(
        "initializing {} v{} with config: {}",
        NAME,
        VERSION,
        config_path.display()
    );

    if !config_path.exists() {
        return Err(Error::ConfigLoadFailed {
            path: config_path.to_path_buf(),
            reason: "Configuration file does not exist".to_string(),
        });
    }

    ConfigLoader::load_from_path(config_path)
}

/// Get default configuration
pub fn default_config() -> Config {
    Config::default()
}
