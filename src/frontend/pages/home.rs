use crate::frontend::app::main::Route;
use dioxus::prelude::*;
use dioxus_router::components::Link;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "text-center p-8",
            h2 { class: "text-3xl font-bold mb-4", "Upload, share and earn" }
            Link {
                to: Route::Register {},
                class: "inline-block bg-purple-700 hover:bg-purple-600 font-bold py-2 px-4 rounded",
                "Get started"
            }
        }
    }
}
