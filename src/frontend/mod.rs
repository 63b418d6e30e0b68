//! Frontend module for the Vidify Host web shell.

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
pub mod states;
