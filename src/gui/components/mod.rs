// src/gui/components/mod.rs
pub mod card_grid;
pub mod filter_panel;
pub mod filter_select;
pub mod header;
pub mod pagination;
pub mod results;
pub mod stats_banner;
