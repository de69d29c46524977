//! Local UI chrome state (theme, overlays, menus).
//!
//! DESIGN
//! ======
//! Keeps transient presentation flags out of the domain states (`dids`,
//! `datasets`, `search`) so panels stay independent of shell chrome.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for theme and overlay toggles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub search_open: bool,
    pub user_menu_open: bool,
}

impl UiState {
    /// Open the search overlay, closing any competing popover.
    pub fn open_search(&mut self) {
        self.search_open = true;
        self.user_menu_open = false;
    }

    pub fn toggle_user_menu(&mut self) {
        self.user_menu_open = !self.user_menu_open;
        if self.user_menu_open {
            self.search_open = false;
        }
    }

    /// Escape closes whatever is open.
    pub fn dismiss(&mut self) {
        self.search_open = false;
        self.user_menu_open = false;
    }
}
