//! Config file sources layered over the built-in catalog.

pub mod global_file;
