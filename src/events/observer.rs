//! Event subscription.
//!
//! Observers run inline, in registration order, before the command that
//! produced the event returns. An observer must not call back into the
//! game's commands from `on_event`.

use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;

use super::event::GameEvent;

/// Receives every event the game emits.
///
/// Any `FnMut(&GameEvent)` closure is an observer.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Fans each event out to the registered observers.
#[derive(Default)]
pub struct EventDispatcher {
    observers: SmallVec<[Box<dyn GameObserver>; 2]>,
}

impl EventDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn notify(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Records events into a shared list.
///
/// Clone the log before subscribing it; the clone handed to the game and
/// the one kept by the caller see the same events.
///
/// ```
/// use stone_ccg::events::{EventLog, GameEvent, GameObserver};
/// use stone_ccg::core::Player;
///
/// let log = EventLog::new();
/// let mut subscribed = log.clone();
/// subscribed.on_event(&GameEvent::PowerUsed { player: Player::First });
///
/// assert_eq!(log.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Remove and return everything recorded so far.
    pub fn take(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Whether an event matching `predicate` was recorded.
    pub fn contains(&self, predicate: impl Fn(&GameEvent) -> bool) -> bool {
        self.events.borrow().iter().any(predicate)
    }
}

impl GameObserver for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(*event);
    }
}

/// Forwards events to the `log` facade.
#[derive(Clone, Copy, Debug)]
pub struct LoggingObserver {
    level: log::Level,
}

impl LoggingObserver {
    #[must_use]
    pub fn new(level: log::Level) -> Self {
        Self { level }
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new(log::Level::Debug)
    }
}

impl GameObserver for LoggingObserver {
    fn on_event(&mut self, event: &GameEvent) {
        log::log!(self.level, "{}: {:?}", event.name(), event);
    }
}
