use crate::frontend::components::common::{Icon, IconKind};
use crate::frontend::components::layout::layers::{BOTTOM_BAR_LAYER, z_index};
use crate::frontend::states::navigation::{BottomBar, NavAction, NavTarget};
use crate::utils::config::AppConfig;
use dioxus::prelude::*;
use dioxus_router::navigator;

const BAR_CLASS: &str = "fixed bottom-0 left-0 w-full p-4 flex justify-around items-center";
const BAR_STYLE: &str = "background: radial-gradient(circle at bottom left, #4b0082, #1c002c);";

fn icon_for(action: NavAction) -> IconKind {
    match action {
        NavAction::Home => IconKind::Home,
        NavAction::Back => IconKind::ArrowLeft,
        NavAction::Next => IconKind::ArrowRight,
        NavAction::History => IconKind::History,
        NavAction::Balance => IconKind::PiggyBank,
    }
}

#[component]
pub fn BottomNav(bar: BottomBar) -> Element {
    let nav = navigator();
    let copyright = use_context::<AppConfig>().site.copyright;
    let bar_style = format!("{BAR_STYLE} {}", z_index(BOTTOM_BAR_LAYER));

    if bar == BottomBar::Copyright {
        return rsx! {
            nav { class: BAR_CLASS, style: "{bar_style}",
                footer {
                    class: "absolute bottom-0 left-0 w-full p-4 text-white text-center",
                    style: BAR_STYLE,
                    p { "{copyright}" }
                }
            }
        };
    }

    rsx! {
        nav { class: BAR_CLASS, style: "{bar_style}",
            for action in bar.actions().iter().copied() {
                button {
                    key: "{action.label()}",
                    class: "flex flex-col items-center text-white",
                    onclick: move |_| match action.target() {
                        NavTarget::Push(route) => { nav.push(route); }
                        NavTarget::HistoryBack => nav.go_back(),
                        NavTarget::HistoryForward => nav.go_forward(),
                    },
                    Icon { kind: icon_for(action), class: "w-6 h-6" }
                    span { class: "text-xs", "{action.label()}" }
                }
            }
        }
    }
}
