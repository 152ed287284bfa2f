//! Phonics CLI library
//!
//! Command-line interface for the phonics syllable and pronunciation engine.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::CliError;
