//! Image item lifecycle.
//!
//! Turns a generic inventory item into a persistent image item by tagging it
//! with the image name and placement size, and enforces the rules that keep
//! such items consistent: they can never be a crafting ingredient that
//! yields output, and hanging one in the world places the image and consumes
//! exactly one unit on success.

pub mod codec;
pub mod inventory;
pub mod item_stack;
pub mod service;

pub use codec::{decode_image_tag, image_item, is_image_item, ImageTag, TagError};
pub use inventory::PlayerInventory;
pub use item_stack::ItemStack;
pub use service::{HangItemEvent, ItemService};
