use crate::frontend::app::main::Route;
use crate::frontend::components::common::{Icon, IconKind};
use crate::frontend::services::context::use_auth;
use crate::frontend::services::listener::ScopedListener;
use crate::frontend::states::dropdown::DropdownMenu;
use dioxus::prelude::*;
use dioxus_router::{components::Link, navigator};
use std::cell::RefCell;
use std::rc::Rc;

// Outside the browser there is no document to listen on, so a transparent
// backdrop catches the outside clicks instead.
const USE_BACKDROP: bool = !cfg!(all(feature = "web", target_arch = "wasm32"));

#[component]
pub fn UserMenu(label: String) -> Element {
    let mut auth = use_auth();
    let nav = navigator();
    let mut menu = use_signal(DropdownMenu::default);
    let mut container = use_signal(|| None::<Rc<MountedData>>);
    let listener = use_hook(|| Rc::new(RefCell::new(None::<ScopedListener>)));

    // Listen for outside clicks only while the menu is open
    use_effect({
        let listener = listener.clone();
        move || {
            let open = menu().is_open();
            let guard = if open {
                outside_click_guard(container.read().as_ref(), menu)
            } else {
                None
            };
            *listener.borrow_mut() = guard;
        }
    });

    use_drop(move || {
        listener.borrow_mut().take();
    });

    let open = menu().is_open();

    let handle_logout = move |_| {
        auth.logout();
        menu.write().close();
        log::info!("Logged out");
        nav.push(Route::Login {});
    };

    rsx! {
        if USE_BACKDROP && open {
            div {
                class: "fixed inset-0 z-0",
                onclick: move |_| { menu.write().click_outside(); },
            }
        }

        div {
            class: "relative z-10",
            onmounted: move |event| container.set(Some(event.data())),
            button {
                class: "flex flex-col items-center focus:outline-none",
                onclick: move |_| menu.write().toggle(),
                Icon { kind: IconKind::UserCircle, class: "text-white w-5 h-5" }
                if open {
                    Icon { kind: IconKind::ChevronUp, class: "text-white mt-1 w-3 h-3" }
                } else {
                    Icon { kind: IconKind::ChevronDown, class: "text-white mt-1 w-3 h-3" }
                }
            }
            if open {
                div { class: "absolute right-0 top-full mt-1 w-48 bg-gray-800 rounded-md shadow-lg z-10 animate-fadeIn",
                    Link {
                        to: Route::Profile {},
                        class: "block px-4 py-2 text-white hover:bg-purple-700",
                        onclick: move |_| menu.write().close(),
                        "Profil - {label}"
                    }
                    Link {
                        to: Route::PaymentMethod {},
                        class: "block px-4 py-2 text-white hover:bg-purple-700",
                        onclick: move |_| menu.write().close(),
                        "Payment Method"
                    }
                    button {
                        class: "w-full text-left block px-4 py-2 text-white hover:bg-purple-700",
                        onclick: handle_logout,
                        "Log Out"
                    }
                }
            }
        }
    }
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
fn outside_click_guard(
    container: Option<&Rc<MountedData>>,
    mut menu: Signal<DropdownMenu>,
) -> Option<ScopedListener> {
    use crate::frontend::services::listener::on_click_outside;

    let element = container?.downcast::<web_sys::Element>()?.clone();
    Some(on_click_outside(element, move || {
        menu.write().click_outside();
    }))
}

#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
fn outside_click_guard(
    _container: Option<&Rc<MountedData>>,
    _menu: Signal<DropdownMenu>,
) -> Option<ScopedListener> {
    None
}
