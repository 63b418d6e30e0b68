//! Layout components.

pub mod header;
pub mod layers;
pub mod main;
pub mod navigation;
pub mod user_menu;

pub use header::Header;
pub use main::Layout;
pub use navigation::BottomNav;
pub use user_menu::UserMenu;
