//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, document
//! attributes, wall-clock time) from page and component logic to improve
//! reuse and testability.

pub mod clock;
pub mod dark_mode;
pub mod deferred;
