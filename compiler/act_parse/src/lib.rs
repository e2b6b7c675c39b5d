//! Act Parse -- overload-resolving recursive-descent parser.
//!
//! Consumes the lexer's token list and produces a typed [`act_ir::Form`]
//! tree per script, together with the accumulated diagnostics and the
//! symbol table built up by `store` forms. Argument lists are validated
//! against each keyword's registered overload candidates; the
//! lowest-registered completed candidate decides which concrete form is
//! built, so resolution is deterministic.
//!
//! Parsing is all-or-nothing: the first diagnostic aborts the script and
//! no partial tree is ever produced.

mod cursor;
mod overload;
mod parser;
mod registry;
mod symbols;

pub use cursor::Cursor;
pub use overload::{ArgInfo, ArgSpec, OverloadSet, Signature};
pub use parser::{parse, ParseOutcome};
pub use registry::{overloads, store_type, ELEM_KINDS};
pub use symbols::SymbolTable;
