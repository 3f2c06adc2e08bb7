//! Error types

mod config;
mod data;

pub use config::*;
pub use data::*;
