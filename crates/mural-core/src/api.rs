//! Host collaborator interfaces.
//!
//! The plugin consumes the surrounding server through these narrow traits:
//! raw interaction event delivery, the image catalog, world placement, the
//! repeating status display, and one-shot player messages. Implementations
//! are shared as `Arc<dyn ...>` and must be thread-safe even though event
//! dispatch itself is single-threaded.

use crate::types::{ActorId, BlockFace, BlockPos};

// ─── Events ──────────────────────────────────────────────────────────────────

/// A raw interaction event delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractEvent {
    /// Right click on a block: the only event that can confirm a selection.
    RightClickBlock {
        actor: ActorId,
        pos: BlockPos,
        face: BlockFace,
    },
    /// Left click, on a block or on air. Always an abort.
    LeftClick { actor: ActorId },
    /// Arm swing with no resolved target. Always an abort.
    ArmSwing { actor: ActorId },
    /// The actor disconnected.
    Quit { actor: ActorId },
}

impl InteractEvent {
    /// The actor that produced this event.
    pub fn actor(&self) -> ActorId {
        match self {
            InteractEvent::RightClickBlock { actor, .. }
            | InteractEvent::LeftClick { actor }
            | InteractEvent::ArmSwing { actor }
            | InteractEvent::Quit { actor } => *actor,
        }
    }
}

/// Result of dispatching an event to a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue normal host handling.
    Continue,
    /// Event was consumed; the host's default behavior must not run.
    Cancelled,
}

/// Handler installed on an [`EventSource`].
pub type InteractHandler = Box<dyn FnMut(InteractEvent) -> EventResult + Send>;

/// Delivers raw interaction events to a subscribed handler.
pub trait EventSource: Send + Sync {
    fn subscribe(&self, handler: InteractHandler) -> Box<dyn Subscription>;
}

/// A live subscription on an [`EventSource`].
pub trait Subscription: Send {
    fn unsubscribe(self: Box<Self>);
}

// ─── Image catalog and placement ─────────────────────────────────────────────

/// A named image known to the host's catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResource {
    pub name: String,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

/// Lookup of image resources by name.
pub trait ResourceCatalog: Send + Sync {
    fn lookup(&self, name: &str) -> Option<ImageResource>;
}

/// Placed images may be removed by players.
pub const PLACE_REMOVABLE: u32 = 1 << 0;
/// Removed images drop an image item.
pub const PLACE_DROPPABLE: u32 = 1 << 1;

/// Renders a confirmed image placement into the world.
pub trait ImagePlacer: Send + Sync {
    /// Returns `false` when the placement was rejected; the caller must then
    /// leave all of its own state untouched.
    #[allow(clippy::too_many_arguments)]
    fn place(
        &self,
        actor: ActorId,
        resource: &ImageResource,
        width: u32,
        height: u32,
        pos: BlockPos,
        face: BlockFace,
        flags: u32,
    ) -> bool;
}

// ─── Player-facing output ────────────────────────────────────────────────────

/// Repeating status-bar text shown to one actor until cleared.
pub trait StatusDisplay: Send + Sync {
    fn show_repeating(&self, actor: ActorId, text: &str) -> Box<dyn StatusHandle>;
}

/// A live status-bar display.
pub trait StatusHandle: Send {
    fn clear(self: Box<Self>);
}

/// One-shot user-visible messages.
pub trait Notifier: Send + Sync {
    fn tell(&self, actor: ActorId, message: &str);
}
