//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `nav`, `chat`, `forms`) so components
//! depend on small focused models. Only `theme` is shared across the tree;
//! the rest is owned by the component instance that creates it.

pub mod chat;
pub mod forms;
pub mod nav;
pub mod theme;
