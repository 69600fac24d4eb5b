//! Image item rules: crafting interception and placement.
//!
//! Two independent interception points. Crafting preparation: any image item
//! in the grid forces an empty result, so image items can never be crafting
//! ingredients. Hanging: a recognized image item never falls through to the
//! host's native frame placement; instead the referenced image is resolved,
//! placed through the host, and on success exactly one unit is consumed from
//! the player's inventory.

use std::sync::Arc;

use tracing::{debug, warn};

use mural_core::api::{
    EventResult, ImagePlacer, Notifier, ResourceCatalog, PLACE_DROPPABLE, PLACE_REMOVABLE,
};
use mural_core::config::ItemSection;
use mural_core::types::{ActorId, BlockFace, BlockPos};

use crate::codec::{decode_image_tag, image_item, is_image_item};
use crate::inventory::PlayerInventory;
use crate::item_stack::ItemStack;

/// A "hang an item on a block face" event from the host.
#[derive(Debug, Clone)]
pub struct HangItemEvent {
    pub actor: ActorId,
    /// The item being hung.
    pub item: ItemStack,
    /// Block the frame would occupy.
    pub pos: BlockPos,
    pub face: BlockFace,
    /// Creative-style mode: placement does not consume the item.
    pub unlimited_resources: bool,
}

/// Enforces the image item lifecycle rules.
pub struct ItemService {
    catalog: Arc<dyn ResourceCatalog>,
    placer: Arc<dyn ImagePlacer>,
    notifier: Arc<dyn Notifier>,
    base_identifier: String,
}

impl ItemService {
    pub fn new(
        config: &ItemSection,
        catalog: Arc<dyn ResourceCatalog>,
        placer: Arc<dyn ImagePlacer>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            catalog,
            placer,
            notifier,
            base_identifier: config.base_identifier.clone(),
        }
    }

    /// Build an image item on the configured base item.
    pub fn image_item(
        &self,
        resource_name: &str,
        amount: u16,
        width: u32,
        height: u32,
    ) -> ItemStack {
        image_item(&self.base_identifier, resource_name, amount, width, height)
    }

    /// Crafting preparation: clear the result whenever any grid slot holds an
    /// image item, regardless of the rest of the grid. Runs before any other
    /// crafting rule so nothing can restore the result.
    pub fn on_prepare_craft(&self, inventory: &mut PlayerInventory) {
        if inventory.crafting_grid.iter().any(is_image_item) {
            inventory.crafting_output = ItemStack::empty();
        }
    }

    /// Hanging interception, steps in order:
    ///
    /// Untagged items are none of our business and pass through. A
    /// recognized image item never reaches the host's native placement, even
    /// when its tag is corrupted or its image is gone. On successful
    /// placement exactly one unit is consumed unless the actor is in an
    /// unlimited-resource mode; on failed placement the inventory is left
    /// untouched.
    pub fn on_hang_item(
        &self,
        event: &HangItemEvent,
        inventory: &mut PlayerInventory,
    ) -> EventResult {
        let tag = match decode_image_tag(&event.item) {
            Ok(None) => return EventResult::Continue,
            Ok(Some(tag)) => tag,
            Err(err) => {
                warn!("{} tried to place a corrupted image item: {err}", event.actor);
                return EventResult::Cancelled;
            }
        };

        let Some(resource) = self.catalog.lookup(&tag.resource_name) else {
            warn!(
                "{} tried to place image item for unknown image \"{}\"",
                event.actor, tag.resource_name
            );
            self.notifier.tell(
                event.actor,
                &format!("Image \"{}\" no longer exists", tag.resource_name),
            );
            return EventResult::Cancelled;
        };

        let flags = PLACE_REMOVABLE | PLACE_DROPPABLE;
        let placed = self.placer.place(
            event.actor,
            &resource,
            tag.width,
            tag.height,
            event.pos,
            event.face,
            flags,
        );
        if !placed {
            return EventResult::Cancelled;
        }

        if !event.unlimited_resources {
            self.consume_one(event, inventory);
        }
        EventResult::Cancelled
    }

    /// Remove one unit of the placed item from the actor's inventory.
    fn consume_one(&self, event: &HangItemEvent, inventory: &mut PlayerInventory) {
        let Some(slot) = inventory.first_matching(&event.item) else {
            debug!(
                "placed image item not found in inventory of {}",
                event.actor
            );
            return;
        };
        let stack = &mut inventory.main[slot];
        if stack.count > 1 {
            stack.count -= 1;
        } else {
            inventory.main[slot] = ItemStack::empty();
        }
    }
}
