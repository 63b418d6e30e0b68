//! Login guard for account pages.

use crate::frontend::app::main::Route;
use crate::frontend::services::context::use_auth;
use crate::frontend::states::navigation::guard_target;
use dioxus::prelude::*;
use dioxus_router::{components::Outlet, navigator};

/// Renders the nested page only for logged-in visitors and sends everyone
/// else to the login page.
#[component]
pub fn ProtectedRoute() -> Element {
    let auth = use_auth();
    let nav = navigator();
    let is_authenticated = auth.is_authenticated;

    use_effect(move || {
        if let Some(target) = guard_target(is_authenticated()) {
            log::debug!("Not logged in, redirecting to {target}");
            nav.replace(target);
        }
    });

    if !is_authenticated() {
        // Redirect happens in the effect
        return rsx! { div {} };
    }

    rsx! { Outlet::<Route> {} }
}
