//! The keyword overload registry.
//!
//! Immutable signature tables, one per keyword, consulted by the parser.
//! Candidate order is registration order; the resolver picks the
//! lowest-registered completed candidate, so the order here is part of the
//! language (e.g. `wait(int, unit)` beats `wait(float, unit)` for an int
//! first argument).

use act_ir::{TokenKind, ValueKind, ValueType};

use crate::overload::{ArgSpec, Signature};

/// Element-kind order shared by the `list` and `compare` candidate tables;
/// a winner index maps back through this to the element kind.
pub const ELEM_KINDS: [ValueKind; 7] = ValueKind::STORABLE;

/// Storable-type order of the `store` candidate table: the seven scalars,
/// then the seven list types, both in `ELEM_KINDS` order.
pub fn store_type(candidate: usize) -> ValueType {
    if candidate < ELEM_KINDS.len() {
        ValueType::scalar(ELEM_KINDS[candidate])
    } else {
        ValueType::list_of(ELEM_KINDS[candidate - ELEM_KINDS.len()])
    }
}

static EMPTY_ONLY: [Signature; 1] = [Signature::empty()];

static CONDITION: [Signature; 1] = [Signature::fixed(&[ArgSpec::Ty(ValueType::BOOL)])];

static INT: [Signature; 3] = [
    Signature::empty(),
    Signature::fixed(&[ArgSpec::Ty(ValueType::INT)]),
    Signature::fixed(&[ArgSpec::Ty(ValueType::FLOAT)]),
];

static FLOAT: [Signature; 3] = [
    Signature::empty(),
    Signature::fixed(&[ArgSpec::Ty(ValueType::FLOAT)]),
    Signature::fixed(&[ArgSpec::Ty(ValueType::INT)]),
];

static BOOL: [Signature; 2] = [
    Signature::empty(),
    Signature::fixed(&[ArgSpec::Ty(ValueType::BOOL)]),
];

static STRING: [Signature; 2] = [
    Signature::empty(),
    Signature::fixed(&[ArgSpec::Ty(ValueType::STR)]),
];

static DIRECTION: [Signature; 2] = [
    Signature::empty(),
    Signature::fixed(&[ArgSpec::Ty(ValueType::DIRECTION)]),
];

static COORD: [Signature; 3] = [
    Signature::empty(),
    Signature::fixed(&[ArgSpec::Ty(ValueType::COORD)]),
    Signature::fixed(&[ArgSpec::Ty(ValueType::INT), ArgSpec::Ty(ValueType::INT)]),
];

static ZONE: [Signature; 3] = [
    Signature::empty(),
    Signature::fixed(&[ArgSpec::Ty(ValueType::ZONE)]),
    Signature::fixed(&[ArgSpec::Ty(ValueType::COORD), ArgSpec::Ty(ValueType::COORD)]),
];

static BOOL_VARIADIC: [Signature; 1] = [Signature::variadic(ArgSpec::Ty(ValueType::BOOL), 0)];

static NOT: [Signature; 1] = [Signature::fixed(&[ArgSpec::Ty(ValueType::BOOL)])];

static WAIT: [Signature; 2] = [
    Signature::fixed(&[
        ArgSpec::Ty(ValueType::INT),
        ArgSpec::Ty(ValueType::TIME_UNIT),
    ]),
    Signature::fixed(&[
        ArgSpec::Ty(ValueType::FLOAT),
        ArgSpec::Ty(ValueType::TIME_UNIT),
    ]),
];

static PRINT: [Signature; 14] = [
    Signature::variadic(ArgSpec::Ty(ValueType::STR), 0),
    Signature::fixed(&[ArgSpec::Ty(ValueType::INT)]),
    Signature::fixed(&[ArgSpec::Ty(ValueType::FLOAT)]),
    Signature::fixed(&[ArgSpec::Ty(ValueType::BOOL)]),
    Signature::fixed(&[ArgSpec::Ty(ValueType::COORD)]),
    Signature::fixed(&[ArgSpec::Ty(ValueType::ZONE)]),
    Signature::fixed(&[ArgSpec::Ty(ValueType::DIRECTION)]),
    Signature::fixed(&[ArgSpec::Ty(ValueType::list_of(ValueKind::Bool))]),
    Signature::fixed(&[ArgSpec::Ty(ValueType::list_of(ValueKind::Coord))]),
    Signature::fixed(&[ArgSpec::Ty(ValueType::list_of(ValueKind::Direction))]),
    Signature::fixed(&[ArgSpec::Ty(ValueType::list_of(ValueKind::Float))]),
    Signature::fixed(&[ArgSpec::Ty(ValueType::list_of(ValueKind::Int))]),
    Signature::fixed(&[ArgSpec::Ty(ValueType::list_of(ValueKind::Str))]),
    Signature::fixed(&[ArgSpec::Ty(ValueType::list_of(ValueKind::Zone))]),
];

// A `list` needs at least one operand: with none there is nothing to infer
// the element kind from (the original surface carried it as a template
// argument, which this grammar dropped).
static LIST: [Signature; 7] = [
    Signature::variadic(ArgSpec::Elem(ValueKind::Bool), 1),
    Signature::variadic(ArgSpec::Elem(ValueKind::Coord), 1),
    Signature::variadic(ArgSpec::Elem(ValueKind::Direction), 1),
    Signature::variadic(ArgSpec::Elem(ValueKind::Float), 1),
    Signature::variadic(ArgSpec::Elem(ValueKind::Int), 1),
    Signature::variadic(ArgSpec::Elem(ValueKind::Str), 1),
    Signature::variadic(ArgSpec::Elem(ValueKind::Zone), 1),
];

// compare() with no operands is vacuously true; otherwise the operands are
// a leading element, the comparator, and a flattenable tail.
static COMPARE: [Signature; 8] = [
    Signature::empty(),
    compare_sig(ValueKind::Bool),
    compare_sig(ValueKind::Coord),
    compare_sig(ValueKind::Direction),
    compare_sig(ValueKind::Float),
    compare_sig(ValueKind::Int),
    compare_sig(ValueKind::Str),
    compare_sig(ValueKind::Zone),
];

const fn compare_sig(kind: ValueKind) -> Signature {
    match kind {
        ValueKind::Bool => Signature::with_tail(
            &[
                ArgSpec::Elem(ValueKind::Bool),
                ArgSpec::Ty(ValueType::COMPARATOR),
            ],
            ArgSpec::Elem(ValueKind::Bool),
        ),
        ValueKind::Coord => Signature::with_tail(
            &[
                ArgSpec::Elem(ValueKind::Coord),
                ArgSpec::Ty(ValueType::COMPARATOR),
            ],
            ArgSpec::Elem(ValueKind::Coord),
        ),
        ValueKind::Direction => Signature::with_tail(
            &[
                ArgSpec::Elem(ValueKind::Direction),
                ArgSpec::Ty(ValueType::COMPARATOR),
            ],
            ArgSpec::Elem(ValueKind::Direction),
        ),
        ValueKind::Float => Signature::with_tail(
            &[
                ArgSpec::Elem(ValueKind::Float),
                ArgSpec::Ty(ValueType::COMPARATOR),
            ],
            ArgSpec::Elem(ValueKind::Float),
        ),
        ValueKind::Str => Signature::with_tail(
            &[
                ArgSpec::Elem(ValueKind::Str),
                ArgSpec::Ty(ValueType::COMPARATOR),
            ],
            ArgSpec::Elem(ValueKind::Str),
        ),
        ValueKind::Zone => Signature::with_tail(
            &[
                ArgSpec::Elem(ValueKind::Zone),
                ArgSpec::Ty(ValueType::COMPARATOR),
            ],
            ArgSpec::Elem(ValueKind::Zone),
        ),
        _ => Signature::with_tail(
            &[
                ArgSpec::Elem(ValueKind::Int),
                ArgSpec::Ty(ValueType::COMPARATOR),
            ],
            ArgSpec::Elem(ValueKind::Int),
        ),
    }
}

static STORE: [Signature; 14] = [
    store_sig(&[ArgSpec::Name, ArgSpec::Ty(ValueType::scalar(ValueKind::Bool))]),
    store_sig(&[ArgSpec::Name, ArgSpec::Ty(ValueType::scalar(ValueKind::Coord))]),
    store_sig(&[
        ArgSpec::Name,
        ArgSpec::Ty(ValueType::scalar(ValueKind::Direction)),
    ]),
    store_sig(&[ArgSpec::Name, ArgSpec::Ty(ValueType::scalar(ValueKind::Float))]),
    store_sig(&[ArgSpec::Name, ArgSpec::Ty(ValueType::scalar(ValueKind::Int))]),
    store_sig(&[ArgSpec::Name, ArgSpec::Ty(ValueType::scalar(ValueKind::Str))]),
    store_sig(&[ArgSpec::Name, ArgSpec::Ty(ValueType::scalar(ValueKind::Zone))]),
    store_sig(&[ArgSpec::Name, ArgSpec::Ty(ValueType::list_of(ValueKind::Bool))]),
    store_sig(&[ArgSpec::Name, ArgSpec::Ty(ValueType::list_of(ValueKind::Coord))]),
    store_sig(&[
        ArgSpec::Name,
        ArgSpec::Ty(ValueType::list_of(ValueKind::Direction)),
    ]),
    store_sig(&[ArgSpec::Name, ArgSpec::Ty(ValueType::list_of(ValueKind::Float))]),
    store_sig(&[ArgSpec::Name, ArgSpec::Ty(ValueType::list_of(ValueKind::Int))]),
    store_sig(&[ArgSpec::Name, ArgSpec::Ty(ValueType::list_of(ValueKind::Str))]),
    store_sig(&[ArgSpec::Name, ArgSpec::Ty(ValueType::list_of(ValueKind::Zone))]),
];

const fn store_sig(required: &'static [ArgSpec]) -> Signature {
    Signature::fixed(required)
}

/// The registered candidates for a keyword's argument list.
///
/// Flow keywords (`if`, `elif`, `loop`, `doloop`) register their condition
/// here; `else` has no argument list at all and does not appear.
pub fn overloads(keyword: &TokenKind) -> &'static [Signature] {
    match keyword {
        TokenKind::Int => &INT,
        TokenKind::Float => &FLOAT,
        TokenKind::Bool => &BOOL,
        TokenKind::Str => &STRING,
        TokenKind::Direction => &DIRECTION,
        TokenKind::Coord => &COORD,
        TokenKind::Zone => &ZONE,
        TokenKind::And | TokenKind::Or => &BOOL_VARIADIC,
        TokenKind::Not => &NOT,
        TokenKind::List => &LIST,
        TokenKind::Compare => &COMPARE,
        TokenKind::Store => &STORE,
        TokenKind::Wait => &WAIT,
        TokenKind::Print => &PRINT,
        TokenKind::If | TokenKind::Elif | TokenKind::Loop | TokenKind::DoLoop => &CONDITION,
        _ => &EMPTY_ONLY,
    }
}
