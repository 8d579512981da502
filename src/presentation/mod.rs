//! Presentation of a running race.
//!
//! The round engine reports progress through [`RaceObserver`]. The console
//! reporter prints it with pacing; [`NullObserver`] discards it.

pub mod console;
pub mod observer;

pub use console::ConsoleReporter;
pub use observer::{NullObserver, RaceObserver};
