//! User menu dropdown state.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownMenu {
    #[default]
    Closed,
    Open,
}

impl DropdownMenu {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Trigger button clicked.
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        };
    }

    /// Click landed outside the menu. Returns whether the state changed.
    pub fn click_outside(&mut self) -> bool {
        let was_open = self.is_open();
        *self = Self::Closed;
        was_open
    }

    /// Menu item selected or the user logged out.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_toggles() {
        let mut menu = DropdownMenu::default();
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn outside_click_closes_an_open_menu() {
        let mut menu = DropdownMenu::Open;
        assert!(menu.click_outside());
        assert_eq!(menu, DropdownMenu::Closed);
    }

    #[test]
    fn outside_click_on_closed_menu_is_a_no_op() {
        let mut menu = DropdownMenu::Closed;
        assert!(!menu.click_outside());
        assert_eq!(menu, DropdownMenu::Closed);
    }

    #[test]
    fn selecting_an_item_closes() {
        let mut menu = DropdownMenu::Open;
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }
}
