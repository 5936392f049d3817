//! Biucing: Full-stack Toolchain Assistant
//!
//! Curated catalogs of software toolchains ("stacks") grouped by domain. The
//! effective catalog is the packaged default layered with an optional user
//! override file, rendered as tables or exported as a file.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
