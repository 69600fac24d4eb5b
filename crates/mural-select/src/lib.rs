//! Interactive block selection.
//!
//! Lets a caller ask a player to pick a block face by clicking in the world,
//! without blocking: completion is reported through callbacks. At most one
//! selection can be pending per actor, and a single shared event subscription
//! exists exactly while at least one selection is pending.

pub mod coordinator;
pub mod task;

#[cfg(test)]
mod test_support;

pub use coordinator::{FailureFn, SelectionCoordinator, SuccessFn};
pub use task::SelectBlockTask;
