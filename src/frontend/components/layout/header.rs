use crate::frontend::app::main::Route;
use crate::frontend::components::common::{Icon, IconKind};
use crate::frontend::components::layout::UserMenu;
use crate::frontend::components::layout::layers::{HEADER_LAYER, z_index};
use crate::frontend::services::context::use_auth;
use crate::utils::config::AppConfig;
use dioxus::prelude::*;
use dioxus_router::navigator;

#[component]
pub fn Header() -> Element {
    let auth = use_auth();
    let nav = navigator();
    let brand = use_context::<AppConfig>().site.brand_name;
    let label = auth.get_username();
    let style = format!(
        "background: radial-gradient(circle at top right, #4b0082, #1c002c); {}",
        z_index(HEADER_LAYER)
    );

    rsx! {
        header {
            class: "fixed top-0 left-0 w-full p-4 text-white flex items-center justify-between",
            style: "{style}",
            div { class: "flex items-center",
                Icon { kind: IconKind::Upload, class: "mr-2 w-5 h-5" }
                h1 { class: "text-2xl font-bold", "{brand}" }
            }
            div { class: "flex items-center",
                if let Some(label) = label {
                    UserMenu { label }
                } else {
                    button {
                        class: "mr-2 bg-purple-700 hover:bg-purple-600 text-white font-bold py-2 px-4 rounded focus:outline-none",
                        onclick: move |_| { nav.push(Route::Dashboard {}); },
                        "Upload"
                    }
                }
            }
        }
    }
}
