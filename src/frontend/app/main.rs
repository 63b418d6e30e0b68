//! Application routing system.

use crate::frontend::components::guard::ProtectedRoute;
use crate::frontend::components::layout::Layout;
use crate::frontend::pages::account::{
    Dashboard, EarningsHistory, Payment, PaymentMethod, Profile, UploadVideo, WithdrawalHistory,
};
use crate::frontend::pages::auth::{Login, Register};
use crate::frontend::pages::home::Home;
use crate::frontend::pages::info::{
    AboutUs, Contact, Disclaimer, Download, PrivacyPolicy, TermsAndConditions,
};
use crate::frontend::pages::video::{EmbedVideo, PlayVideo, ShortLink};

use dioxus::prelude::*;
use dioxus_router::Routable;

/// Main routing enum for the application.
///
/// Everything renders inside [`Layout`]; account pages additionally sit
/// behind [`ProtectedRoute`]. `/:id` is declared last so every static path
/// wins over a video id.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        /// Landing page.
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},

        #[layout(ProtectedRoute)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/upload")]
            UploadVideo {},
            #[route("/payment")]
            Payment {},
            #[route("/profile")]
            Profile {},
            #[route("/payment-method")]
            PaymentMethod {},
            #[route("/earnings-history")]
            EarningsHistory {},
            #[route("/withdrawal-history")]
            WithdrawalHistory {},
        #[end_layout]

        #[route("/download")]
        Download {},
        #[route("/contact")]
        Contact {},
        #[route("/privacy-policy")]
        PrivacyPolicy {},
        #[route("/about-us")]
        AboutUs {},
        #[route("/terms-and-conditions")]
        TermsAndConditions {},
        #[route("/disclaimer")]
        Disclaimer {},
        /// Embeddable player.
        #[route("/e/:id")]
        EmbedVideo { id: String },
        /// Short link that forwards to the player.
        #[route("/s/:id")]
        ShortLink { id: String },
        /// Video player addressed by id.
        #[route("/:id")]
        PlayVideo { id: String },
}

impl Route {
    /// Pages that sit behind the login guard.
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::Dashboard {}
                | Route::UploadVideo {}
                | Route::Payment {}
                | Route::Profile {}
                | Route::PaymentMethod {}
                | Route::EarningsHistory {}
                | Route::WithdrawalHistory {}
        )
    }

    /// Login and register pages.
    pub fn is_auth_page(&self) -> bool {
        matches!(self, Route::Login {} | Route::Register {})
    }

    /// Pages a logged-in visitor is moved away from.
    pub fn is_entry_page(&self) -> bool {
        matches!(self, Route::Home {}) || self.is_auth_page()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(path: &str) -> Route {
        path.parse::<Route>()
            .unwrap_or_else(|_| panic!("{path} should match a route"))
    }

    #[test]
    fn static_paths_map_to_their_pages() {
        assert_eq!(parse("/"), Route::Home {});
        assert_eq!(parse("/login"), Route::Login {});
        assert_eq!(parse("/register"), Route::Register {});
        assert_eq!(parse("/dashboard"), Route::Dashboard {});
        assert_eq!(parse("/upload"), Route::UploadVideo {});
        assert_eq!(parse("/payment"), Route::Payment {});
        assert_eq!(parse("/payment-method"), Route::PaymentMethod {});
        assert_eq!(parse("/withdrawal-history"), Route::WithdrawalHistory {});
        assert_eq!(parse("/terms-and-conditions"), Route::TermsAndConditions {});
        assert_eq!(parse("/about-us"), Route::AboutUs {});
    }

    #[test]
    fn every_declared_path_parses_and_renders_back() {
        for path in [
            "/",
            "/login",
            "/register",
            "/dashboard",
            "/upload",
            "/payment",
            "/profile",
            "/payment-method",
            "/earnings-history",
            "/withdrawal-history",
            "/download",
            "/contact",
            "/privacy-policy",
            "/about-us",
            "/terms-and-conditions",
            "/disclaimer",
            "/e/v1",
            "/s/v1",
            "/v1",
        ] {
            assert_eq!(parse(path).to_string(), path);
        }
    }

    #[test]
    fn video_paths_carry_the_id() {
        assert_eq!(parse("/abc123"), Route::PlayVideo { id: "abc123".into() });
        assert_eq!(parse("/e/abc123"), Route::EmbedVideo { id: "abc123".into() });
        assert_eq!(parse("/s/xyz"), Route::ShortLink { id: "xyz".into() });
    }

    #[test]
    fn routes_render_back_to_paths() {
        assert_eq!(Route::Dashboard {}.to_string(), "/dashboard");
        assert_eq!(Route::EarningsHistory {}.to_string(), "/earnings-history");
        assert_eq!(Route::EmbedVideo { id: "v1".into() }.to_string(), "/e/v1");
    }

    #[test]
    fn account_pages_require_auth() {
        for path in [
            "/dashboard",
            "/upload",
            "/payment",
            "/profile",
            "/payment-method",
            "/earnings-history",
            "/withdrawal-history",
        ] {
            assert!(parse(path).requires_auth(), "{path} should be protected");
        }
    }

    #[test]
    fn public_pages_do_not_require_auth() {
        for path in [
            "/",
            "/login",
            "/register",
            "/download",
            "/contact",
            "/privacy-policy",
            "/about-us",
            "/terms-and-conditions",
            "/disclaimer",
            "/abc",
            "/e/abc",
            "/s/abc",
        ] {
            assert!(!parse(path).requires_auth(), "{path} should be public");
        }
    }

    #[test]
    fn entry_pages_are_landing_login_and_register() {
        assert!(Route::Home {}.is_entry_page());
        assert!(Route::Login {}.is_entry_page());
        assert!(Route::Register {}.is_entry_page());
        assert!(!Route::Dashboard {}.is_entry_page());
        assert!(!Route::Contact {}.is_entry_page());
        assert!(!Route::Home {}.is_auth_page());
    }
}
