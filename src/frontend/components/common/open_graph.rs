//! Link preview metadata.

use crate::utils::config::AppConfig;
use dioxus::prelude::*;

#[component]
pub fn OpenGraph() -> Element {
    let config = use_context::<AppConfig>();
    let site = config.site;

    rsx! {
        document::Title { "{site.brand_name}" }
        document::Meta { name: "description", content: site.og_description.clone() }
        document::Meta { property: "og:type", content: "website" }
        document::Meta { property: "og:site_name", content: site.brand_name.clone() }
        document::Meta { property: "og:title", content: site.og_title.clone() }
        document::Meta { property: "og:description", content: site.og_description.clone() }
        document::Meta { property: "og:image", content: site.og_image.clone() }
        document::Meta { property: "og:url", content: site.og_url.clone() }
    }
}
