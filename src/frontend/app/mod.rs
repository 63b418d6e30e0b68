pub mod main;

pub use main::Route;
