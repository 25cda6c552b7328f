// src/gui/mod.rs
pub mod app;
mod components;

pub use app::{App, run};
