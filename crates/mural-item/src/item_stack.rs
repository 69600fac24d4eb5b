//! ItemStack type.
//!
//! Represents an item in a player's inventory. The persisted tag compound
//! rides inside the stack and survives inventory moves, stacking, and host
//! serialization.

use mural_core::tag::TagCompound;

/// A single item stack.
///
/// An empty identifier means the slot is empty (air).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemStack {
    /// Namespaced item identifier, e.g. `minecraft:glow_item_frame`.
    pub identifier: String,
    /// Number of items in this stack (1-255 in practice).
    pub count: u16,
    /// Custom display name, if any.
    pub display_name: Option<String>,
    /// Lore lines shown under the name.
    pub lore: Vec<String>,
    /// Persisted key/value tags.
    pub tags: TagCompound,
}

impl ItemStack {
    /// An empty slot (air).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a plain item stack with no name, lore, or tags.
    pub fn new(identifier: impl Into<String>, count: u16) -> Self {
        Self {
            identifier: identifier.into(),
            count,
            ..Self::default()
        }
    }

    /// Whether this slot is empty.
    pub fn is_empty(&self) -> bool {
        self.identifier.is_empty() || self.count == 0
    }

    /// Whether `other` is the same kind of item: identical identifier, name,
    /// lore, and tags. Count is ignored, so a partially consumed stack still
    /// matches.
    pub fn matches(&self, other: &ItemStack) -> bool {
        !self.is_empty()
            && self.identifier == other.identifier
            && self.display_name == other.display_name
            && self.lore == other.lore
            && self.tags == other.tags
    }
}
