//! Components shared across pages.

pub mod error_fallback;
pub mod icons;
pub mod open_graph;

pub use error_fallback::AppErrorBoundary;
pub use icons::{Icon, IconKind};
pub use open_graph::OpenGraph;
