//! The closed type vocabulary of Act scripts.
//!
//! Every expression the parser accepts has exactly one [`ValueType`]: one of
//! the seven storable scalar categories, a homogeneous list of one of them,
//! or one of the argument-only kinds (`TimeUnit`, `Comparator`, `Identifier`)
//! that can appear in an argument position but never in the variable store.

use std::fmt;

/// Scalar category of a value or of a list's elements.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ValueKind {
    Int,
    Float,
    Bool,
    Str,
    Coord,
    Zone,
    Direction,
    /// Time-unit literal (`SECOND`, `MILLISECOND`, `MINUTE`). Argument-only.
    TimeUnit,
    /// Comparator literal (`equal`, `lesser`, ...). Argument-only.
    Comparator,
    /// A bare, not-yet-stored identifier (the target slot of `store`).
    Identifier,
}

impl ValueKind {
    /// The seven kinds a variable (or a list element) may hold.
    pub const STORABLE: [ValueKind; 7] = [
        ValueKind::Bool,
        ValueKind::Coord,
        ValueKind::Direction,
        ValueKind::Float,
        ValueKind::Int,
        ValueKind::Str,
        ValueKind::Zone,
    ];

    /// Ordering comparators (`greater`, `lesser`, ...) apply only to these.
    #[inline]
    pub const fn is_numeric(self) -> bool {
        matches!(self, ValueKind::Int | ValueKind::Float)
    }

    /// Whether a variable may hold a value of this kind.
    #[inline]
    pub const fn is_storable(self) -> bool {
        !matches!(
            self,
            ValueKind::TimeUnit | ValueKind::Comparator | ValueKind::Identifier
        )
    }

    /// Keyword-style name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Bool => "bool",
            ValueKind::Str => "string",
            ValueKind::Coord => "coord",
            ValueKind::Zone => "zone",
            ValueKind::Direction => "direction",
            ValueKind::TimeUnit => "time unit",
            ValueKind::Comparator => "comparator",
            ValueKind::Identifier => "identifier",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scalar kind or a homogeneous list of one.
///
/// The two-level shape (kind + list flag) replaces an open-ended dimension
/// count: the value categories of the language are the seven scalars and one
/// list layer over each, nothing deeper.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ValueType {
    pub kind: ValueKind,
    pub list: bool,
}

impl ValueType {
    pub const INT: ValueType = ValueType::scalar(ValueKind::Int);
    pub const FLOAT: ValueType = ValueType::scalar(ValueKind::Float);
    pub const BOOL: ValueType = ValueType::scalar(ValueKind::Bool);
    pub const STR: ValueType = ValueType::scalar(ValueKind::Str);
    pub const COORD: ValueType = ValueType::scalar(ValueKind::Coord);
    pub const ZONE: ValueType = ValueType::scalar(ValueKind::Zone);
    pub const DIRECTION: ValueType = ValueType::scalar(ValueKind::Direction);
    pub const TIME_UNIT: ValueType = ValueType::scalar(ValueKind::TimeUnit);
    pub const COMPARATOR: ValueType = ValueType::scalar(ValueKind::Comparator);
    pub const IDENTIFIER: ValueType = ValueType::scalar(ValueKind::Identifier);

    #[inline]
    pub const fn scalar(kind: ValueKind) -> Self {
        ValueType { kind, list: false }
    }

    #[inline]
    pub const fn list_of(kind: ValueKind) -> Self {
        ValueType { kind, list: true }
    }

    /// Whether a variable may hold a value of this type.
    #[inline]
    pub const fn is_storable(self) -> bool {
        self.kind.is_storable()
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.list {
            write!(f, "list<{}>", self.kind)
        } else {
            self.kind.fmt(f)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_names() {
        assert_eq!(ValueType::INT.to_string(), "int");
        assert_eq!(ValueType::list_of(ValueKind::Str).to_string(), "list<string>");
        assert_eq!(ValueType::TIME_UNIT.to_string(), "time unit");
    }

    #[test]
    fn storable_excludes_argument_only_kinds() {
        for kind in ValueKind::STORABLE {
            assert!(ValueType::scalar(kind).is_storable());
            assert!(ValueType::list_of(kind).is_storable());
        }
        assert!(!ValueType::TIME_UNIT.is_storable());
        assert!(!ValueType::COMPARATOR.is_storable());
        assert!(!ValueType::IDENTIFIER.is_storable());
    }

    #[test]
    fn numeric_kinds() {
        assert!(ValueKind::Int.is_numeric());
        assert!(ValueKind::Float.is_numeric());
        assert!(!ValueKind::Str.is_numeric());
        assert!(!ValueKind::Coord.is_numeric());
    }
}
