//! Core crate exports for the `emopick` terminal emoji picker.
//!
//! The root module re-exports the picker, its configuration and the
//! collaborators it is built from (catalog, matcher, screen) so embedders can
//! drive the selection loop without digging through the module hierarchy.

pub mod catalog;
mod error;
pub mod logging;
pub mod matcher;
pub mod picker;
pub mod screen;
pub mod width;

pub use catalog::Catalog;
pub use error::PickerError;
pub use matcher::{FuzzyMatcher, Match, Matcher};
pub use picker::{CursorUnderflow, Outcome, Picker, PickerConfig};
pub use screen::{CrosstermEvents, EventSource, Screen, ScriptedEvents, TerminalScreen};
