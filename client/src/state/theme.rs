//! Site-wide display theme and its context handle.
//!
//! DESIGN
//! ======
//! The theme is the only state shared across components. It lives in a single
//! `RwSignal` wrapped by `ThemeContext`, which exposes a read accessor and one
//! mutator (`toggle`). Components never write the signal directly.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;

use crate::util::dark_mode;

/// Light/dark display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value written to the `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Handle to the shared theme, provided once at the application root.
#[derive(Clone, Copy, Debug)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn new(initial: Theme) -> Self {
        Self { theme: RwSignal::new(initial) }
    }

    /// Current theme, tracked when read inside a reactive scope.
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn get_untracked(&self) -> Theme {
        self.theme.get_untracked()
    }

    /// Flip light/dark and mirror the result onto the document.
    ///
    /// Returns `None` without touching the document once the owning scope
    /// has been disposed.
    pub fn toggle(&self) -> Option<Theme> {
        let next = self.theme.try_update(|t| {
            *t = t.toggled();
            *t
        })?;
        dark_mode::apply(next);
        Some(next)
    }
}

/// Create the theme context at the default value and register it.
pub fn provide_theme() -> ThemeContext {
    let ctx = ThemeContext::new(Theme::default());
    dark_mode::apply(ctx.get_untracked());
    provide_context(ctx);
    ctx
}

/// Fetch the theme context registered by `provide_theme`.
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
