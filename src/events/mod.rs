//! Change notifications for UI collaborators.
//!
//! The game owns an [`EventBus`]; observers [`subscribe`](EventBus::subscribe)
//! a callback and receive every [`GameEvent`] in registration order,
//! synchronously, from inside the call that changed the state. Moving the
//! work to another thread is the observer's job.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use rust_boardgame::board::LinearTile;
//! use rust_boardgame::events::{EventBus, EventKind, GameEvent};
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let mut bus: EventBus<LinearTile> = EventBus::new();
//!
//! let sink = Rc::clone(&seen);
//! bus.subscribe(move |event| sink.borrow_mut().push(event.kind()));
//!
//! bus.emit(GameEvent::GameReset);
//! assert_eq!(*seen.borrow(), vec![EventKind::GameReset]);
//! ```

mod bus;
mod event;

pub use bus::{EventBus, ListenerId};
pub use event::{EventKind, GameEvent};
