//! Shared types and collaborator interfaces for the mural plugin.
//!
//! This crate defines the leaf data types (actors, block positions, item
//! tags), the abstract host interfaces the plugin consumes (event delivery,
//! image catalog, placement, messaging), and the plugin configuration.
//! It has no dependency on the selection or item crates.

pub mod api;
pub mod config;
pub mod tag;
pub mod types;

pub use api::{
    EventResult, EventSource, ImagePlacer, ImageResource, InteractEvent, Notifier,
    ResourceCatalog, StatusDisplay, StatusHandle, Subscription,
};
pub use config::MuralConfig;
pub use tag::{TagCompound, TagValue};
pub use types::{ActorId, BlockFace, BlockPos};
