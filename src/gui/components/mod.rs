// src/gui/components/mod.rs
pub mod source_bar;
pub mod export_bar;
pub mod preview_table;
