//! The typed syntax tree produced by the parser.
//!
//! One [`Form`] per successfully parsed keyword form or literal, with its
//! argument/condition/body edges already shaped by overload resolution.
//! Forms are a parse-time artifact: lowering converts a script's root form
//! into the tag tree and the forms are dropped.

use crate::value::{Comparator, Direction, TimeUnit};
use crate::value_type::{ValueKind, ValueType};

/// A parsed form with its source line.
#[derive(Clone, Debug, PartialEq)]
pub struct Form {
    pub line: u32,
    pub kind: FormKind,
}

impl Form {
    #[inline]
    pub fn new(line: u32, kind: FormKind) -> Self {
        Form { line, kind }
    }

    /// The value type this form produces, or `None` for statement-only
    /// forms (flow control, `store`, `wait`, `print`) and unresolved
    /// identifiers.
    pub fn value_type(&self) -> Option<ValueType> {
        match &self.kind {
            FormKind::IntLit(_) | FormKind::Int(_) => Some(ValueType::INT),
            FormKind::Float(_) => Some(ValueType::FLOAT),
            FormKind::BoolLit(_)
            | FormKind::Bool(_)
            | FormKind::And(_)
            | FormKind::Or(_)
            | FormKind::Not(_)
            | FormKind::Compare { .. } => Some(ValueType::BOOL),
            FormKind::StrLit(_) | FormKind::Str(_) => Some(ValueType::STR),
            FormKind::Coord(_) => Some(ValueType::COORD),
            FormKind::Zone(_) => Some(ValueType::ZONE),
            FormKind::DirectionLit(_) | FormKind::Direction(_) => Some(ValueType::DIRECTION),
            FormKind::TimeLit(_) => Some(ValueType::TIME_UNIT),
            FormKind::CmpLit(_) => Some(ValueType::COMPARATOR),
            FormKind::List { elem, .. } => Some(ValueType::list_of(*elem)),
            FormKind::Ident { ty, .. } => *ty,
            FormKind::Store { .. }
            | FormKind::Wait { .. }
            | FormKind::Print(_)
            | FormKind::Main { .. }
            | FormKind::If { .. }
            | FormKind::Elif { .. }
            | FormKind::Else { .. }
            | FormKind::Loop { .. }
            | FormKind::DoLoop { .. }
            | FormKind::Break
            | FormKind::Continue => None,
        }
    }
}

/// Argument shape of a `coord`/`zone` form: empty, wrapping a same-typed
/// expression, or built from two components.
#[derive(Clone, Debug, PartialEq)]
pub enum PairArgs {
    Empty,
    Wrap(Box<Form>),
    Pair(Box<Form>, Box<Form>),
}

/// Form payloads, one variant per keyword form or literal.
#[derive(Clone, Debug, PartialEq)]
pub enum FormKind {
    // Literal tokens used as expressions
    IntLit(i64),
    BoolLit(bool),
    StrLit(String),
    DirectionLit(Direction),
    TimeLit(TimeUnit),
    CmpLit(Comparator),
    /// Identifier reference; `ty` is the symbol-table type at the point of
    /// use, `None` while unresolved (legal only as a `store` target).
    Ident { name: String, ty: Option<ValueType> },

    // Value constructors
    Int(Option<Box<Form>>),
    Float(Option<Box<Form>>),
    Bool(Option<Box<Form>>),
    Str(Option<Box<Form>>),
    Direction(Option<Box<Form>>),
    Coord(PairArgs),
    Zone(PairArgs),
    List { elem: ValueKind, items: Vec<Form> },

    // Boolean combinators
    And(Vec<Form>),
    Or(Vec<Form>),
    Not(Box<Form>),
    /// `cmp` is `None` only for the zero-operand form, which is vacuously
    /// true under every comparator.
    Compare {
        cmp: Option<Comparator>,
        items: Vec<Form>,
    },

    // Actions
    Store { name: String, value: Box<Form> },
    Wait { amount: Box<Form>, unit: TimeUnit },
    Print(Vec<Form>),

    // Flow control
    Main { body: Vec<Form> },
    If { cond: Box<Form>, body: Vec<Form> },
    Elif { cond: Box<Form>, body: Vec<Form> },
    Else { body: Vec<Form> },
    Loop { cond: Box<Form>, body: Vec<Form> },
    DoLoop { cond: Box<Form>, body: Vec<Form> },
    Break,
    Continue,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn value_types_of_expressions() {
        let form = Form::new(1, FormKind::IntLit(3));
        assert_eq!(form.value_type(), Some(ValueType::INT));

        let list = Form::new(
            1,
            FormKind::List {
                elem: ValueKind::Str,
                items: vec![],
            },
        );
        assert_eq!(list.value_type(), Some(ValueType::list_of(ValueKind::Str)));

        let unresolved = Form::new(
            1,
            FormKind::Ident {
                name: "x".to_string(),
                ty: None,
            },
        );
        assert_eq!(unresolved.value_type(), None);
    }

    #[test]
    fn statements_have_no_value_type() {
        let brk = Form::new(2, FormKind::Break);
        assert_eq!(brk.value_type(), None);
        let print = Form::new(2, FormKind::Print(vec![]));
        assert_eq!(print.value_type(), None);
    }
}
