// ---------------------------------------------------------------------------
// MenuState — the two-state overlay toggle
// ---------------------------------------------------------------------------

/// Open/closed state of the overlay menu. While open, the pointer uniform is
/// forced to the far-outside sentinel so the whole frame decays; the button
/// label flips between "SYSTEM" and "CLOSE" to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// Flip on each button activation.
    pub fn toggle(&mut self) {
        *self = match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Label shown on the toggle button in this state.
    pub fn button_label(self) -> &'static str {
        match self {
            MenuState::Closed => "SYSTEM",
            MenuState::Open => "CLOSE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn one_click_opens_two_clicks_close() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert_eq!(menu, MenuState::Open);
        menu.toggle();
        assert_eq!(menu, MenuState::Closed);
    }

    #[test]
    fn label_always_agrees_with_state() {
        let mut menu = MenuState::default();
        assert_eq!(menu.button_label(), "SYSTEM");
        menu.toggle();
        assert_eq!(menu.button_label(), "CLOSE");
        menu.toggle();
        assert_eq!(menu.button_label(), "SYSTEM");
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut menu = MenuState::default();
        for _ in 0..9 {
            menu.toggle();
        }
        assert_eq!(menu, MenuState::Open);
        menu.toggle();
        assert_eq!(menu, MenuState::Closed);
    }
}
