use crate::page::{NavIcon, NavMenu, ACTIVE_CLASS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Closed,
    Open,
}

impl NavState {
    pub fn icon(&self) -> NavIcon {
        match self {
            NavState::Closed => NavIcon::Menu,
            NavState::Open => NavIcon::Close,
        }
    }
}

/// Open/closed state of the collapsible navigation menu.
///
/// Every transition is written through to the menu node: the `active` class
/// and the toggle icon always reflect the current state.
#[derive(Debug, Clone)]
pub struct NavToggle {
    state: NavState,
}

impl NavToggle {
    /// Binds to `menu` and forces it into the closed state.
    pub fn attach(menu: &mut NavMenu) -> Self {
        let toggle = Self {
            state: NavState::Closed,
        };
        toggle.apply(menu);
        toggle
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn click_toggle(&mut self, menu: &mut NavMenu) -> NavState {
        self.state = match self.state {
            NavState::Closed => NavState::Open,
            NavState::Open => NavState::Closed,
        };
        self.apply(menu);
        self.state
    }

    pub fn click_link(&mut self, menu: &mut NavMenu) -> NavState {
        self.state = NavState::Closed;
        self.apply(menu);
        self.state
    }

    fn apply(&self, menu: &mut NavMenu) {
        match self.state {
            NavState::Open => menu.classes.add(ACTIVE_CLASS),
            NavState::Closed => menu.classes.remove(ACTIVE_CLASS),
        };
        menu.toggle_icon = self.state.icon();
    }
}
