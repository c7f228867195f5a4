//! Effective sidebar state for the current viewport.
//!
//! The persisted preference belongs to wide viewports. While the viewport is
//! narrow the sidebar overlays the page, so it starts collapsed and is
//! opened and closed in memory only.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarView {
    narrow: bool,
    narrow_collapsed: bool,
}

impl SidebarView {
    pub fn is_narrow(&self) -> bool {
        self.narrow
    }

    /// Record a viewport change. Entering a narrow viewport collapses.
    pub fn set_narrow(&mut self, narrow: bool) {
        if narrow && !self.narrow {
            self.narrow_collapsed = true;
        }
        self.narrow = narrow;
    }

    /// Whether the sidebar renders collapsed, given the persisted preference.
    pub fn collapsed(&self, preference: bool) -> bool {
        if self.narrow {
            self.narrow_collapsed
        } else {
            preference
        }
    }

    /// Flip the overlay on a narrow viewport. Returns `false` on a wide one,
    /// where the caller toggles the persisted preference instead.
    pub fn toggle_narrow(&mut self) -> bool {
        if self.narrow {
            self.narrow_collapsed = !self.narrow_collapsed;
        }
        self.narrow
    }

    /// Close the overlay, e.g. after navigating. No-op on a wide viewport.
    pub fn dismiss(&mut self) {
        if self.narrow {
            self.narrow_collapsed = true;
        }
    }
}
