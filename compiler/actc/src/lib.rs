//! Act CLI library.
//!
//! File loading and command wiring live here, outside the core crates:
//! the interpreter itself performs no I/O.

pub mod commands;
