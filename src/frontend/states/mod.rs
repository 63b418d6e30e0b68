//! UI state machines and navigation rules.

pub mod dropdown;
pub mod navigation;
