//! Navigation decisions made by the layout.

use crate::frontend::app::main::Route;

/// Bottom bar variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BottomBar {
    /// Full navigation for logged-in visitors.
    Full,
    /// A single Home button on the login and register pages.
    HomeOnly,
    /// Static copyright footer.
    Copyright,
}

impl BottomBar {
    pub fn select(authenticated: bool, route: &Route) -> Self {
        if authenticated {
            Self::Full
        } else if route.is_auth_page() {
            Self::HomeOnly
        } else {
            Self::Copyright
        }
    }

    pub fn actions(self) -> &'static [NavAction] {
        match self {
            Self::Full => &NavAction::FULL,
            Self::HomeOnly => &[NavAction::Home],
            Self::Copyright => &[],
        }
    }
}

/// What a bottom bar button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Home,
    Back,
    Next,
    History,
    Balance,
}

/// Resolved effect of a [`NavAction`].
#[derive(Debug, Clone, PartialEq)]
pub enum NavTarget {
    Push(Route),
    HistoryBack,
    HistoryForward,
}

impl NavAction {
    pub const FULL: [NavAction; 5] = [
        NavAction::Home,
        NavAction::Back,
        NavAction::Next,
        NavAction::History,
        NavAction::Balance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavAction::Home => "Home",
            NavAction::Back => "Back",
            NavAction::Next => "Next",
            NavAction::History => "History",
            NavAction::Balance => "Saldo",
        }
    }

    pub fn target(self) -> NavTarget {
        match self {
            NavAction::Home => NavTarget::Push(Route::Home {}),
            NavAction::Back => NavTarget::HistoryBack,
            NavAction::Next => NavTarget::HistoryForward,
            NavAction::History => NavTarget::Push(Route::WithdrawalHistory {}),
            NavAction::Balance => NavTarget::Push(Route::Payment {}),
        }
    }
}

/// Where a logged-in visitor on an entry page is sent.
pub fn redirect_target(authenticated: bool, route: &Route) -> Option<Route> {
    (authenticated && route.is_entry_page()).then_some(Route::Dashboard {})
}

/// Where the login guard sends a visitor who is not logged in.
pub fn guard_target(authenticated: bool) -> Option<Route> {
    (!authenticated).then_some(Route::Login {})
}
