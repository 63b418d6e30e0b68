//! Frontend services: session storage and login state.

pub mod context;
pub mod listener;
pub mod storage;
pub mod user;
