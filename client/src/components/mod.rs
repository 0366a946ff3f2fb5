//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shared site chrome (navigation, overlays, footer,
//! chat widget) and the presentational sections pages are built from. Only the
//! theme is read from context; everything else is owned locally.

pub mod chat_widget;
pub mod footer;
pub mod mobile_menu;
pub mod nav_bar;
pub mod page_shell;
pub mod resources_panel;
pub mod sections;
pub mod submission_form;
