//! Mock collaborators shared by the selection tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use mural_core::api::{
    EventSource, InteractHandler, Notifier, StatusDisplay, StatusHandle, Subscription,
};
use mural_core::config::SelectionSection;
use mural_core::types::{ActorId, BlockFace, BlockPos};

use crate::coordinator::{FailureFn, SelectionCoordinator, SuccessFn};

#[derive(Default)]
pub struct EventsState {
    /// Currently installed subscriptions (expected to stay 0 or 1).
    pub active: AtomicUsize,
    pub subscribes: AtomicUsize,
    pub unsubscribes: AtomicUsize,
}

struct TestEvents(Arc<EventsState>);

impl EventSource for TestEvents {
    fn subscribe(&self, _handler: InteractHandler) -> Box<dyn Subscription> {
        self.0.subscribes.fetch_add(1, Ordering::SeqCst);
        self.0.active.fetch_add(1, Ordering::SeqCst);
        Box::new(TestSubscription(self.0.clone()))
    }
}

struct TestSubscription(Arc<EventsState>);

impl Subscription for TestSubscription {
    fn unsubscribe(self: Box<Self>) {
        self.0.active.fetch_sub(1, Ordering::SeqCst);
        self.0.unsubscribes.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct DisplayState {
    pub shown: Mutex<Vec<(ActorId, String)>>,
    /// Currently open status displays.
    pub active: AtomicUsize,
    pub cleared: AtomicUsize,
}

struct TestDisplay(Arc<DisplayState>);

impl StatusDisplay for TestDisplay {
    fn show_repeating(&self, actor: ActorId, text: &str) -> Box<dyn StatusHandle> {
        self.0.shown.lock().unwrap().push((actor, text.to_string()));
        self.0.active.fetch_add(1, Ordering::SeqCst);
        Box::new(TestStatusHandle(self.0.clone()))
    }
}

struct TestStatusHandle(Arc<DisplayState>);

impl StatusHandle for TestStatusHandle {
    fn clear(self: Box<Self>) {
        self.0.active.fetch_sub(1, Ordering::SeqCst);
        self.0.cleared.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct NotifierState {
    pub messages: Mutex<Vec<(ActorId, String)>>,
}

struct TestNotifier(Arc<NotifierState>);

impl Notifier for TestNotifier {
    fn tell(&self, actor: ActorId, message: &str) {
        self.0
            .messages
            .lock()
            .unwrap()
            .push((actor, message.to_string()));
    }
}

/// A coordinator wired to recording mocks.
pub struct Harness {
    pub events: Arc<EventsState>,
    pub display: Arc<DisplayState>,
    pub notifier: Arc<NotifierState>,
    pub coordinator: Arc<SelectionCoordinator>,
}

pub fn harness() -> Harness {
    let events = Arc::new(EventsState::default());
    let display = Arc::new(DisplayState::default());
    let notifier = Arc::new(NotifierState::default());
    let coordinator = SelectionCoordinator::new(
        Arc::new(TestEvents(events.clone())),
        Arc::new(TestDisplay(display.clone())),
        Arc::new(TestNotifier(notifier.clone())),
        SelectionSection::default(),
    );
    Harness {
        events,
        display,
        notifier,
        coordinator,
    }
}

/// A success callback that records every invocation.
pub fn recorded_successes() -> (Arc<Mutex<Vec<(BlockPos, BlockFace)>>>, SuccessFn) {
    let record = Arc::new(Mutex::new(Vec::new()));
    let sink = record.clone();
    let callback: SuccessFn = Box::new(move |pos, face| {
        sink.lock().unwrap().push((pos, face));
    });
    (record, callback)
}

/// A failure callback that counts its invocations.
pub fn recorded_failures() -> (Arc<AtomicUsize>, FailureFn) {
    let count = Arc::new(AtomicUsize::new(0));
    let sink = count.clone();
    let callback: FailureFn = Box::new(move || {
        sink.fetch_add(1, Ordering::SeqCst);
    });
    (count, callback)
}
