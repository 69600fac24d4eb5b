//! A single pending block selection for one actor.

use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::coordinator::{Callbacks, FailureFn, SelectionCoordinator, SharedCallbacks, SuccessFn};
use mural_core::types::ActorId;

/// Asks one actor to pick a block face by clicking in the world.
///
/// Completion is observed only through the callbacks: a right click on a
/// block fires `on_success` with the clicked position and face; a left click
/// or arm swing fires `on_failure`; a disconnect fires neither. A task runs
/// at most once and is rejected when its actor already has a pending
/// selection.
pub struct SelectBlockTask {
    coordinator: Arc<SelectionCoordinator>,
    actor: ActorId,
    callbacks: SharedCallbacks,
    started: bool,
}

impl SelectBlockTask {
    pub fn new(coordinator: Arc<SelectionCoordinator>, actor: ActorId) -> Self {
        Self {
            coordinator,
            actor,
            callbacks: Arc::new(Mutex::new(Callbacks::default())),
            started: false,
        }
    }

    /// The actor this selection belongs to.
    pub fn actor(&self) -> ActorId {
        self.actor
    }

    /// Set or clear the success callback. Effective until the selection
    /// completes, even after [`run`](Self::run).
    pub fn on_success(&mut self, callback: Option<SuccessFn>) {
        self.callbacks.lock().unwrap().on_success = callback;
    }

    /// Set or clear the failure callback.
    pub fn on_failure(&mut self, callback: Option<FailureFn>) {
        self.callbacks.lock().unwrap().on_failure = callback;
    }

    /// Start the selection, showing `help_message` in the actor's status bar
    /// until completion.
    ///
    /// Rejected with a user-visible notice when the actor already has a
    /// pending selection; the rejected call changes no state and this task
    /// may be run again later. A task that has started cannot be re-run.
    pub fn run(&mut self, help_message: &str) {
        if self.started {
            warn!("ignoring repeated run of selection task for {}", self.actor);
            return;
        }
        if self
            .coordinator
            .begin(self.actor, self.callbacks.clone(), help_message)
        {
            self.started = true;
        }
    }

    /// Tear down this selection if it is still pending. Invokes no
    /// callbacks; safe to call repeatedly.
    pub fn cancel(&self) {
        if self.started {
            self.coordinator.cancel(self.actor);
        }
    }
}
