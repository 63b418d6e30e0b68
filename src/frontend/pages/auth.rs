//! Login and registration pages.

use crate::frontend::app::main::Route;
use crate::frontend::services::context::use_auth;
use crate::frontend::services::user::SessionUser;
use dioxus::prelude::*;
use dioxus_router::components::Link;
use serde_json::{Map, Value};

#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut username = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    // The layout moves logged-in visitors to the dashboard.
    let submit = move |event: FormEvent| {
        event.prevent_default();
        let name = username.read().trim().to_string();
        if name.is_empty() {
            error.set(Some("Username wajib diisi".to_string()));
            return;
        }

        let mut fields = Map::new();
        fields.insert("username".to_string(), Value::String(name));
        match auth.login(SessionUser::new(fields)) {
            Ok(()) => error.set(None),
            Err(e) => {
                log::error!("Failed to store session: {e}");
                error.set(Some("Gagal menyimpan sesi".to_string()));
            }
        }
    };

    rsx! {
        div { class: "max-w-sm mx-auto p-6",
            h2 { class: "text-2xl font-bold mb-4", "Login" }
            form { onsubmit: submit,
                input {
                    class: "w-full p-2 mb-2 rounded text-black",
                    placeholder: "Username",
                    value: "{username}",
                    oninput: move |e| username.set(e.value()),
                }
                if let Some(message) = error() {
                    p { class: "text-red-400 text-sm mb-2", "{message}" }
                }
                button {
                    class: "w-full bg-purple-700 hover:bg-purple-600 font-bold py-2 rounded",
                    r#type: "submit",
                    "Login"
                }
            }
            p { class: "mt-4 text-sm",
                "Belum punya akun? "
                Link { to: Route::Register {}, class: "underline", "Daftar" }
            }
        }
    }
}

#[component]
pub fn Register() -> Element {
    rsx! {
        div { class: "max-w-sm mx-auto p-6",
            h2 { class: "text-2xl font-bold mb-4", "Register" }
            p { class: "mt-4 text-sm",
                "Sudah punya akun? "
                Link { to: Route::Login {}, class: "underline", "Login" }
            }
        }
    }
}
