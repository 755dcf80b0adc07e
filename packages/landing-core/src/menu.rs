//! Mobile navigation menu state

/// Open/closed state of the mobile menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Value mirrored into the toggle's `aria-expanded`
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// Flip visibility; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// A click landed somewhere on the page. Clicks inside the menu or on the
    /// toggle are ignored; anything else closes an open menu.
    pub fn on_page_click(&mut self, inside_menu_or_toggle: bool) -> bool {
        if inside_menu_or_toggle {
            return false;
        }
        self.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_mirrors_aria_expanded() {
        let mut menu = MenuState::default();
        assert_eq!(menu.aria_expanded(), "false");
        assert!(menu.toggle());
        assert_eq!(menu.aria_expanded(), "true");
        assert!(!menu.toggle());
        assert_eq!(menu.aria_expanded(), "false");
    }

    #[test]
    fn close_is_idempotent() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.close());
        assert!(!menu.close());
        assert!(!menu.is_open());
    }

    #[test]
    fn outside_click_closes_inside_click_does_not() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(!menu.on_page_click(true));
        assert!(menu.is_open());
        assert!(menu.on_page_click(false));
        assert!(!menu.is_open());
    }
}
