//! Routes raw interaction events to pending selections.
//!
//! The coordinator owns the registry of pending selections (at most one per
//! actor) and the single shared subscription on the host event source. The
//! subscription exists exactly while the registry is non-empty; both
//! transitions happen under the registry lock, so the subscription can never
//! be double-created or leaked.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::debug;

use mural_core::api::{
    EventResult, EventSource, InteractEvent, Notifier, StatusDisplay, StatusHandle, Subscription,
};
use mural_core::config::SelectionSection;
use mural_core::types::{ActorId, BlockFace, BlockPos};

/// Success callback: receives the confirmed block position and face.
pub type SuccessFn = Box<dyn FnOnce(BlockPos, BlockFace) + Send>;
/// Failure callback: the selection was aborted.
pub type FailureFn = Box<dyn FnOnce() + Send>;

const CONFLICT_NOTICE: &str = "You already have a pending action!";

/// Completion callbacks of one selection, shared between the task handle and
/// the registry so they can be replaced until the selection completes.
#[derive(Default)]
pub(crate) struct Callbacks {
    pub(crate) on_success: Option<SuccessFn>,
    pub(crate) on_failure: Option<FailureFn>,
}

pub(crate) type SharedCallbacks = Arc<Mutex<Callbacks>>;

struct ActiveTask {
    callbacks: SharedCallbacks,
    status: Option<Box<dyn StatusHandle>>,
}

#[derive(Default)]
struct Inner {
    tasks: HashMap<ActorId, ActiveTask>,
    subscription: Option<Box<dyn Subscription>>,
}

/// Dispatcher for all pending block selections.
pub struct SelectionCoordinator {
    events: Arc<dyn EventSource>,
    display: Arc<dyn StatusDisplay>,
    notifier: Arc<dyn Notifier>,
    cancel_hint: String,
    inner: Mutex<Inner>,
}

impl SelectionCoordinator {
    pub fn new(
        events: Arc<dyn EventSource>,
        display: Arc<dyn StatusDisplay>,
        notifier: Arc<dyn Notifier>,
        selection: SelectionSection,
    ) -> Arc<Self> {
        Arc::new(Self {
            events,
            display,
            notifier,
            cancel_hint: selection.cancel_hint,
            inner: Mutex::new(Inner::default()),
        })
    }

    /// Register a selection for `actor`, or reject it with a notice when the
    /// actor already has one pending. Installs the shared subscription on the
    /// empty-to-occupied registry transition.
    pub(crate) fn begin(
        self: &Arc<Self>,
        actor: ActorId,
        callbacks: SharedCallbacks,
        help_message: &str,
    ) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if inner.tasks.contains_key(&actor) {
            drop(inner);
            self.notifier.tell(actor, CONFLICT_NOTICE);
            return false;
        }

        if inner.tasks.is_empty() {
            let weak = Arc::downgrade(self);
            inner.subscription = Some(self.events.subscribe(Box::new(
                move |event: InteractEvent| match weak.upgrade() {
                    Some(coordinator) => coordinator.handle_event(event),
                    None => EventResult::Continue,
                },
            )));
            debug!("installed shared interaction subscription");
        }

        let text = format!("{help_message} - {}", self.cancel_hint);
        let status = self.display.show_repeating(actor, &text);
        inner.tasks.insert(
            actor,
            ActiveTask {
                callbacks,
                status: Some(status),
            },
        );
        true
    }

    /// Route one raw interaction event.
    ///
    /// Events for actors without a pending selection are left untouched. A
    /// right click on a block confirms; a left click or an arm swing aborts;
    /// a disconnect drops the selection without invoking any callback.
    pub fn handle_event(&self, event: InteractEvent) -> EventResult {
        match event {
            InteractEvent::RightClickBlock { actor, pos, face } => {
                self.complete(actor, Some((pos, face)))
            }
            InteractEvent::LeftClick { actor } | InteractEvent::ArmSwing { actor } => {
                self.complete(actor, None)
            }
            InteractEvent::Quit { actor } => {
                if self.remove(actor).is_some() {
                    debug!("dropped pending selection of disconnected {actor}");
                }
                EventResult::Continue
            }
        }
    }

    /// Tear down the pending selection for `actor`, if any. Invokes no
    /// callbacks; safe to call repeatedly.
    pub fn cancel(&self, actor: ActorId) {
        if self.remove(actor).is_some() {
            debug!("cancelled pending selection of {actor}");
        }
    }

    /// Whether `actor` currently has a pending selection.
    pub fn is_selecting(&self, actor: ActorId) -> bool {
        self.inner.lock().unwrap().tasks.contains_key(&actor)
    }

    fn complete(&self, actor: ActorId, target: Option<(BlockPos, BlockFace)>) -> EventResult {
        let Some(task) = self.remove(actor) else {
            return EventResult::Continue;
        };

        // The registry entry is gone and the lock released, so a callback may
        // start a new selection for the same actor.
        let (on_success, on_failure) = {
            let mut callbacks = task.callbacks.lock().unwrap();
            (callbacks.on_success.take(), callbacks.on_failure.take())
        };
        match target {
            Some((pos, face)) => {
                if let Some(callback) = on_success {
                    callback(pos, face);
                }
            }
            None => {
                if let Some(callback) = on_failure {
                    callback();
                }
            }
        }
        EventResult::Cancelled
    }

    /// Remove `actor`'s registry entry, clearing its status display and
    /// tearing down the subscription on the occupied-to-empty transition.
    fn remove(&self, actor: ActorId) -> Option<ActiveTask> {
        let mut inner = self.inner.lock().unwrap();
        let mut task = inner.tasks.remove(&actor)?;
        if let Some(status) = task.status.take() {
            status.clear();
        }
        let subscription = if inner.tasks.is_empty() {
            inner.subscription.take()
        } else {
            None
        };
        drop(inner);

        if let Some(subscription) = subscription {
            subscription.unsubscribe();
            debug!("removed shared interaction subscription");
        }
        Some(task)
    }
}
