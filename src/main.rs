mod frontend;
mod utils;

use crate::frontend::app::Route;
use crate::frontend::components::common::AppErrorBoundary;
use crate::frontend::services::context::AuthState;
use crate::frontend::services::storage::SessionStore;
use crate::utils::config::AppConfig;
use dioxus::LaunchBuilder;
use dioxus::prelude::*;
use dioxus_router::Router;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

fn main() {
    let config = AppConfig::load();
    utils::logging::init(&config.logging.level);
    log::info!("Starting {}", config.site.brand_name);

    let builder = LaunchBuilder::new().with_context(config.clone());

    #[cfg(feature = "desktop")]
    let builder = builder.with_cfg(desktop_config(&config));

    builder.launch(AppRoot);
}

#[cfg(feature = "desktop")]
fn desktop_config(config: &AppConfig) -> dioxus_desktop::Config {
    use dioxus_desktop::{Config, LogicalSize, WindowBuilder};

    let size = LogicalSize::new(1280.0, 832.0);
    Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title(config.site.brand_name.clone())
                .with_inner_size(size),
        )
        .with_menu(None)
}

#[component]
fn AppRoot() -> Element {
    let config = use_context::<AppConfig>();
    let auth = use_hook(|| AuthState::restore(SessionStore::default(), config.session.storage_key));
    use_context_provider(|| auth);

    rsx! {
        document::Script { src: TAILWIND_CDN }
        document::Stylesheet { href: MAIN_CSS }
        AppErrorBoundary {
            Router::<Route> {}
        }
    }
}
