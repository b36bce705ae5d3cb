// src/lib.rs

#[macro_use]
pub mod macros;

#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod csv;
pub mod price;
pub mod menu;
pub mod render;
pub mod cart;

pub mod convert;
pub mod file;

#[cfg(feature = "cli")]
pub mod cli;
pub mod gui;

pub use convert::{ConvertSummary, MenuPage, convert_file, convert_reader, convert_str};
pub use error::ConvertError;
pub use price::{PriceInfo, PriceRule, interpret};
