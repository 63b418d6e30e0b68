//! Public information pages.

use dioxus::prelude::*;

#[component]
fn InfoPage(title: &'static str) -> Element {
    rsx! {
        article { class: "max-w-3xl mx-auto p-6 pb-24",
            h2 { class: "text-2xl font-bold mb-4", "{title}" }
        }
    }
}

#[component]
pub fn Download() -> Element {
    rsx! { InfoPage { title: "Download" } }
}

#[component]
pub fn Contact() -> Element {
    rsx! { InfoPage { title: "Contact" } }
}

#[component]
pub fn PrivacyPolicy() -> Element {
    rsx! { InfoPage { title: "Privacy Policy" } }
}

#[component]
pub fn AboutUs() -> Element {
    rsx! { InfoPage { title: "About Us" } }
}

#[component]
pub fn TermsAndConditions() -> Element {
    rsx! { InfoPage { title: "Terms and Conditions" } }
}

#[component]
pub fn Disclaimer() -> Element {
    rsx! { InfoPage { title: "Disclaimer" } }
}
