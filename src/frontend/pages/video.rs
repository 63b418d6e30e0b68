//! Video player entry points.

use crate::frontend::app::main::Route;
use dioxus::prelude::*;
use dioxus_router::navigator;

#[component]
pub fn PlayVideo(id: String) -> Element {
    rsx! {
        section { class: "p-6 pb-24",
            div { class: "aspect-video w-full bg-black rounded", "data-video-id": "{id}" }
        }
    }
}

/// Same player, reached through the embed path.
#[component]
pub fn EmbedVideo(id: String) -> Element {
    rsx! { PlayVideo { id } }
}

/// Short link; forwards to the player for the same id.
#[component]
pub fn ShortLink(id: String) -> Element {
    let nav = navigator();

    use_effect(use_reactive((&id,), move |(id,)| {
        nav.replace(Route::PlayVideo { id });
    }));

    rsx! { p { class: "p-6", "Redirecting..." } }
}
