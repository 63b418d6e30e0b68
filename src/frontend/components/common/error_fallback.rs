//! Failure screen shown when a routed page fails to render.

use dioxus::prelude::*;

/// Catches render errors anywhere below it and shows [`ErrorFallback`].
#[component]
pub fn AppErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_errors: ErrorContext| {
                log::error!("A page failed to render, showing the fallback screen");
                rsx! { ErrorFallback {} }
            },
            {children}
        }
    }
}

#[component]
pub fn ErrorFallback() -> Element {
    rsx! {
        div { class: "text-center text-red-500 p-4",
            h1 { class: "text-2xl font-bold mb-2", "Terjadi Kesalahan" }
            p { "Maaf, terjadi kesalahan yang tidak terduga." }
            button {
                class: "mt-4 bg-blue-500 hover:bg-blue-600 text-white font-bold py-2 px-4 rounded",
                onclick: move |_| {
                    let _ = document::eval("window.location.reload();");
                },
                "Muat Ulang Halaman"
            }
        }
    }
}
