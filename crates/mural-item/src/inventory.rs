//! Player inventory slots.
//!
//! Manages the 36-slot main inventory plus the crafting grid and its output
//! slot. Only the pieces the image item lifecycle touches are modeled here;
//! armor, offhand, and cursor stay with the host.

use crate::item_stack::ItemStack;

/// Main inventory slots (0-8 = hotbar).
pub const MAIN_SLOTS: usize = 36;
/// Crafting grid slots (3×3; first 4 for the 2×2 grid).
pub const CRAFTING_SLOTS: usize = 9;

/// Player inventory with main and crafting slots.
pub struct PlayerInventory {
    /// Main inventory: 36 slots. Slots 0-8 = hotbar.
    pub main: Vec<ItemStack>,
    /// Crafting grid: 9 slots.
    pub crafting_grid: Vec<ItemStack>,
    /// Crafting output: 1 slot for the result.
    pub crafting_output: ItemStack,
    /// Currently selected hotbar slot (0-8).
    pub held_slot: u8,
}

impl Default for PlayerInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerInventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self {
            main: (0..MAIN_SLOTS).map(|_| ItemStack::empty()).collect(),
            crafting_grid: (0..CRAFTING_SLOTS).map(|_| ItemStack::empty()).collect(),
            crafting_output: ItemStack::empty(),
            held_slot: 0,
        }
    }

    /// Get the currently held item (hotbar slot).
    pub fn held_item(&self) -> &ItemStack {
        &self.main[self.held_slot as usize]
    }

    /// Set a main inventory slot.
    pub fn set_slot(&mut self, slot: usize, item: ItemStack) {
        if let Some(s) = self.main.get_mut(slot) {
            *s = item;
        }
    }

    /// First main slot holding the same kind of item (count ignored).
    pub fn first_matching(&self, item: &ItemStack) -> Option<usize> {
        self.main.iter().position(|slot| slot.matches(item))
    }
}
