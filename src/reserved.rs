//! Reserved Module Names
//!
//! MicroPython builds a number of modules into the runtime. A user source
//! file whose base name equals one of them would shadow the built-in on
//! import, so the file-save/flash path consults this guard before letting a
//! file onto the device filesystem.
//!
//! The guard works on *base names*: the caller strips any path and extension
//! first. Membership is a case-sensitive exact match ("Os" is fine, "os" is
//! not).

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::error::{Error, Result};

/// Modules built into the runtime which mustn't be used as file names
/// for source code.
static MICROPYTHON_MODULES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "storage",
        "os",
        "touchio",
        "microcontroller",
        "bitbangio",
        "digitalio",
        "audiobusio",
        "multiterminal",
        "nvm",
        "pulseio",
        "usb_hid",
        "analogio",
        "time",
        "busio",
        "random",
        "audioio",
        "sys",
        "math",
        "builtins",
    ]
    .into_iter()
    .collect()
});

/// Immutable set of runtime-reserved module names
#[derive(Debug, Clone)]
pub struct ReservedNames {
    names: &'static HashSet<&'static str>,
}

impl ReservedNames {
    /// The built-in MicroPython reserved-name set
    pub fn micropython() -> Self {
        Self {
            names: &MICROPYTHON_MODULES,
        }
    }

    /// Check whether a base name equals a reserved runtime module name
    pub fn is_reserved(&self, base_name: &str) -> bool {
        self.names.contains(base_name)
    }

    /// Reject a base name if it is reserved
    ///
    /// Convenience for the file-save/flash path: returns
    /// [`Error::ReservedName`] when the name would shadow a built-in.
    pub fn check(&self, base_name: &str) -> Result<()> {
        if self.is_reserved(base_name) {
            Err(Error::ReservedName {
                name: base_name.to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Number of reserved names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over the reserved names
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.iter().copied()
    }
}

impl Default for ReservedNames {
    fn default() -> Self {
        Self::micropython()
    }
}
