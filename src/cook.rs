//! Main module for cook library functionality

pub mod aggregation;
pub mod ast;
pub mod config;
pub mod error;
pub mod formats;
pub mod inflection;
pub mod loader;
pub mod quantity;
pub mod testing;
