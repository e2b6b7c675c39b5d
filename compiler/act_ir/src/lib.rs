//! Act IR -- shared data model for the Act interpreter.
//!
//! Three representations flow through the pipeline:
//!
//! 1. [`Token`] -- flat lexer output, one kind per keyword/literal/punctuation
//! 2. [`Form`] -- typed syntax tree built by the overload-resolving parser,
//!    discarded after lowering
//! 3. [`Tag`]/[`TagTree`] -- the execution tree, a flat arena addressed by
//!    [`TagId`] indices, built once per script and run many times
//!
//! plus the closed value vocabulary ([`ValueKind`], [`ValueType`],
//! [`Value`]) shared by all stages.

mod form;
mod tag;
mod token;
mod value;
mod value_type;

pub use form::{Form, FormKind, PairArgs};
pub use tag::{Tag, TagId, TagKind, TagTree};
pub use token::{Token, TokenKind};
pub use value::{Comparator, Coord, Direction, ListValue, TimeUnit, Value, Zone};
pub use value_type::{ValueKind, ValueType};
