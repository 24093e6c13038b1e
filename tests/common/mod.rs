//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use rust_boardgame::{GameEvent, PlayerSpec, Token};
use tracing_subscriber::EnvFilter;

/// Route engine logs through the test harness. Set `RUST_LOG=trace` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn birthdate() -> NaiveDate {
    NaiveDate::from_ymd_opt(1988, 8, 8).unwrap()
}

pub fn spec(name: &str, token: Token) -> PlayerSpec {
    PlayerSpec::new(name, token, birthdate())
}

/// Shared event log plus a listener that appends to it.
pub fn recorder<T: Clone + 'static>() -> (Rc<RefCell<Vec<GameEvent<T>>>>, impl FnMut(&GameEvent<T>)) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    (log, move |event: &GameEvent<T>| sink.borrow_mut().push(event.clone()))
}
