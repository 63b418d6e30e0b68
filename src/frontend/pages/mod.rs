//! Pages mounted by the router.

pub mod account;
pub mod auth;
pub mod home;
pub mod info;
pub mod video;
