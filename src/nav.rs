/// Where a click landed, relative to the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Menu,
    Toggle,
    Elsewhere,
}

/// Open/closed state of the collapsible navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Returns true if the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::take(&mut self.open)
    }

    /// Closes on clicks outside the menu. The toggle runs its own handler.
    pub fn click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Elsewhere => self.close(),
            ClickTarget::Menu | ClickTarget::Toggle => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut menu = NavMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_logo_click_closes_open_menu() {
        // the logo sits in the nav bar but outside the menu
        let mut menu = NavMenu::default();
        menu.toggle();
        assert!(menu.click(ClickTarget::Elsewhere));
        assert!(!menu.is_open());
        assert!(!menu.click(ClickTarget::Elsewhere));
    }

    #[test]
    fn test_menu_and_toggle_clicks_keep_it_open() {
        let mut menu = NavMenu::default();
        menu.toggle();
        assert!(!menu.click(ClickTarget::Menu));
        assert!(!menu.click(ClickTarget::Toggle));
        assert!(menu.is_open());
    }
}
