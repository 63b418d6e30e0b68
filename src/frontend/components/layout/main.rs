//! Page shell shared by every route.

use crate::frontend::app::main::Route;
use crate::frontend::components::common::{AppErrorBoundary, OpenGraph};
use crate::frontend::components::layout::{BottomNav, Header};
use crate::frontend::services::context::use_auth;
use crate::frontend::states::navigation::{BottomBar, redirect_target};
use dioxus::prelude::*;
use dioxus_router::{components::Outlet, navigator, use_route};

#[component]
pub fn Layout() -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();
    let nav = navigator();
    let is_authenticated = auth.is_authenticated;

    // Logged-in visitors don't stay on the landing, login or register pages
    use_effect(use_reactive((&route,), move |(route,)| {
        if let Some(target) = redirect_target(is_authenticated(), &route) {
            log::debug!("Already logged in, leaving {route} for {target}");
            nav.push(target);
        }
    }));

    let bar = BottomBar::select(is_authenticated(), &route);

    rsx! {
        div { class: "flex flex-col min-h-screen",
            OpenGraph {}

            Header {}

            main {
                class: "flex-1 text-white pt-20",
                style: "background: radial-gradient(circle at center, #1c002c, #0c0016);",
                AppErrorBoundary {
                    Outlet::<Route> {}
                }
            }

            BottomNav { bar }
        }
    }
}
