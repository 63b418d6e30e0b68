//! Pages behind the login guard.

use dioxus::prelude::*;

#[component]
fn AccountPage(title: &'static str) -> Element {
    rsx! {
        section { class: "p-6 pb-24",
            h2 { class: "text-2xl font-bold", "{title}" }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { AccountPage { title: "Dashboard" } }
}

#[component]
pub fn UploadVideo() -> Element {
    rsx! { AccountPage { title: "Upload Video" } }
}

#[component]
pub fn Payment() -> Element {
    rsx! { AccountPage { title: "Saldo" } }
}

#[component]
pub fn Profile() -> Element {
    rsx! { AccountPage { title: "Profil" } }
}

#[component]
pub fn PaymentMethod() -> Element {
    rsx! { AccountPage { title: "Payment Method" } }
}

#[component]
pub fn EarningsHistory() -> Element {
    rsx! { AccountPage { title: "Earnings History" } }
}

#[component]
pub fn WithdrawalHistory() -> Element {
    rsx! { AccountPage { title: "Withdrawal History" } }
}
