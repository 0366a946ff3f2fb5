//! Mirrors the active theme onto the document root.
//!
//! Writes a `data-theme` attribute on `<html>` so stylesheet rules can switch
//! palettes. The preference is session-only: nothing is read from or written
//! to browser storage.
//!
//! TRADE-OFFS
//! ==========
//! SSR paths no-op to keep server rendering deterministic; the server always
//! emits the default theme and the browser applies changes after hydration.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::Theme;

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Icon shown on the theme toggle: the mode the click switches to.
pub fn toggle_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "\u{263E}",
        Theme::Dark => "\u{2600}",
    }
}

/// Accessible label for the theme toggle button.
pub fn toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "Switch to dark mode",
        Theme::Dark => "Switch to light mode",
    }
}
