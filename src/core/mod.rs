// src/core/mod.rs

pub mod net;
pub mod parse;
pub mod format;
