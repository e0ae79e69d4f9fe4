//! Event notification.
//!
//! The engine announces each state change synchronously to every
//! subscribed `GameObserver`. Rendering, remote exposure and test harnesses
//! subscribe here instead of polling the whole state.

pub mod event;
pub mod observer;

pub use event::GameEvent;
pub use observer::{EventDispatcher, EventLog, GameObserver, LoggingObserver};
