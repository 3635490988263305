//! Command handlers for Jewel
//!
//! Each submodule implements one CLI subcommand.

pub mod catalog;
pub mod idea;
pub mod serve;
