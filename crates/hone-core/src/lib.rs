//! # hone-core
//!
//! Core types, errors, configuration, and logging for the hone
//! prompt-intelligence pipeline.

pub mod config;
pub mod errors;
pub mod logging;
pub mod types;
