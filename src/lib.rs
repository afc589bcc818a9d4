// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod collector;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod loader;
pub mod logging;
pub mod progress;
pub mod runner;
pub mod sample;
pub mod specs;
pub mod store;
pub mod visualize;

pub use error::{Error, Result};
pub use sample::Sample;
