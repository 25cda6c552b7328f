// src/lib.rs
pub mod card;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod gui;
pub mod log;
pub mod model;
pub mod pipeline;
pub mod source;
pub mod stats;
