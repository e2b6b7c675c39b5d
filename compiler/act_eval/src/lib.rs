//! Act Eval -- lowering and execution of Act scripts.
//!
//! This crate turns a parsed script form into a reusable [`act_ir::TagTree`]
//! (with literal constants pre-baked) and walks it:
//!
//! - [`Script`]: one lowered tree, runnable many times
//! - [`Executor`]: one run -- depth-first, single-threaded, with
//!   break/continue/elif-chain semantics driven by per-node runtime flags
//! - [`VarStore`]: the flat per-run variable store
//! - [`ActionSurface`]: the host boundary (`suspend`/`emit`/abort polling),
//!   with stdout and capture-buffer implementations
//!
//! The executor has no internal fault path; the only way a run ends early
//! is an [`Interrupt`] raised by the surface, which unwinds through every
//! nested frame.

mod env;
mod exec;
mod lower;
mod script;
mod surface;

#[cfg(test)]
mod tests;

pub use env::VarStore;
pub use exec::Executor;
pub use lower::lower;
pub use script::Script;
pub use surface::{ActionSurface, BufferSurface, Interrupt, StdoutSurface};
