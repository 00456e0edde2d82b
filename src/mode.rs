//! Board Mode Descriptor
//!
//! Metadata the host renders for this mode (name, description, save
//! behavior) and the ordered list of user actions it offers. Hosts build
//! their toolbar from [`BoardMode::actions`]; the run action is gated by a
//! capability flag because the mode ships in two variants, one with a run
//! button and one that only offers the REPL toggle.

use serde::{Deserialize, Serialize};

use crate::config::Capabilities;

/// A user action offered by the mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Stable identifier, also used to pick the icon
    pub name: String,
    /// Name shown on the control
    pub display_name: String,
    /// Longer description, shown as a tooltip
    pub description: String,
    /// Keyboard shortcut
    pub shortcut: String,
}

/// Descriptor for the PyBoard mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardMode {
    /// Mode name
    pub name: String,
    /// One-line description
    pub description: String,
    /// Delay in milliseconds before an edited file is auto-saved;
    /// zero disables auto-save
    pub save_timeout: u32,
}

impl BoardMode {
    /// The PyBoard mode descriptor
    pub fn pyboard() -> Self {
        Self {
            name: "PyBoard".to_string(),
            description: "Write code for PyBoards.".to_string(),
            save_timeout: 0,
        }
    }

    /// Ordered list of actions offered by this mode
    ///
    /// The REPL toggle is always present; the run action only when the
    /// capability flag enables it.
    pub fn actions(&self, capabilities: &Capabilities) -> Vec<Action> {
        let mut actions = Vec::new();
        if capabilities.run_action {
            actions.push(Action {
                name: "run".to_string(),
                display_name: "Run".to_string(),
                description: "Run your code directly on the pyboard via the REPL.".to_string(),
                shortcut: "F5".to_string(),
            });
        }
        actions.push(Action {
            name: "repl".to_string(),
            display_name: "REPL".to_string(),
            description: "Use the REPL to live-code on the board.".to_string(),
            shortcut: "CTRL+Shift+U".to_string(),
        });
        actions
    }
}

impl Default for BoardMode {
    fn default() -> Self {
        Self::pyboard()
    }
}
