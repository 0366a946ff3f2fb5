//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page composes static content and form state inside `PageShell` and
//! delegates rendering details to `components`. Pages keyed by a route
//! parameter resolve it through the content catalogue and return `Result`
//! so a failed lookup surfaces through the shell's fault boundary.

pub mod about;
pub mod apply;
pub mod articles;
pub mod blog;
pub mod careers;
pub mod changelog;
pub mod contact;
pub mod features;
pub mod help;
pub mod home;
pub mod not_found;
pub mod pricing;
pub mod request_demo;
pub mod solutions;
