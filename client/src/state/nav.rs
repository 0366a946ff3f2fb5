//! Navigation bar overlay flags.
//!
//! DESIGN
//! ======
//! The resources dropdown and the mobile menu are independent: toggling one
//! never changes the other. Both start closed and are dropped with the
//! navigation bar that owns them.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Transient overlay state owned by one navigation bar instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub resources_open: bool,
    pub mobile_menu_open: bool,
}

impl NavState {
    pub fn toggle_resources(&mut self) {
        self.resources_open = !self.resources_open;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_resources(&mut self) {
        self.resources_open = false;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn any_open(&self) -> bool {
        self.resources_open || self.mobile_menu_open
    }
}
