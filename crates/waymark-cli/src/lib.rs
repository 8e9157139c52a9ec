//! Waymark CLI library.
//!
//! This crate provides the output formatting shared by the `waymark` binary's
//! subcommands.

pub mod output;
