//! Board Identity Registry
//!
//! Recognizes MicroPython-class boards by the USB (vendor ID, product ID)
//! pair they report. Device-discovery code asks the registry whether a
//! freshly-plugged serial device belongs to this board family; an unmatched
//! pair simply means "not ours" and discovery moves on to other registries.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A single USB identity recognized as part of the board family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardId {
    /// USB vendor ID
    pub vendor_id: u16,
    /// USB product ID
    pub product_id: u16,
}

impl BoardId {
    /// Create a new board identity
    pub fn new(vendor_id: u16, product_id: u16) -> Self {
        Self {
            vendor_id,
            product_id,
        }
    }
}

/// Immutable registry of board identities
///
/// Constructed once at startup and passed by reference to consumers.
/// Order carries no priority; lookup is exact-match over the whole set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRegistry {
    entries: Vec<BoardId>,
}

impl BoardRegistry {
    /// Create a registry from a list of identities
    pub fn new(entries: Vec<BoardId>) -> Self {
        Self { entries }
    }

    /// The built-in PyBoard registry
    pub fn pyboard() -> Self {
        PYBOARD_REGISTRY.clone()
    }

    /// Create a registry extending the built-in catalog with extra entries
    pub fn pyboard_with_extras(extras: &[BoardId]) -> Self {
        let mut entries = PYBOARD_REGISTRY.entries.clone();
        entries.extend_from_slice(extras);
        Self { entries }
    }

    /// Check whether a (vendor_id, product_id) pair names a known board
    pub fn matches(&self, vendor_id: u16, product_id: u16) -> bool {
        self.entries
            .iter()
            .any(|id| id.vendor_id == vendor_id && id.product_id == product_id)
    }

    /// Number of registered identities
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the registered identities
    pub fn iter(&self) -> impl Iterator<Item = &BoardId> {
        self.entries.iter()
    }
}

/// Boards recognized as PyBoards
static PYBOARD_REGISTRY: Lazy<BoardRegistry> = Lazy::new(|| {
    BoardRegistry::new(vec![
        BoardId::new(0xF055, 0x9801), // PYBv1.0
        BoardId::new(0xF055, 0x9800), // PYBD
    ])
});
