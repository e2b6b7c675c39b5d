//! Runtime values.
//!
//! [`Value`] is a closed sum over the storable categories: the seven scalars
//! plus a homogeneous list. Extraction is total -- asking a value for the
//! wrong category yields that category's default, never a panic -- so the
//! executor has no internal fault path.

use std::fmt;

use crate::value_type::{ValueKind, ValueType};

/// A screen coordinate.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Coord { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// A rectangular screen region, corner to corner.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Zone {
    pub top_left: Coord,
    pub bottom_right: Coord,
}

impl Zone {
    #[inline]
    pub const fn new(top_left: Coord, bottom_right: Coord) -> Self {
        Zone {
            top_left,
            bottom_right,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.top_left, self.bottom_right)
    }
}

/// A compass direction (swipe heading).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum Direction {
    #[default]
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// Short compass form, the representation `print` emits.
    pub const fn short(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::South => "S",
            Direction::East => "E",
            Direction::West => "W",
            Direction::NorthEast => "NE",
            Direction::NorthWest => "NW",
            Direction::SouthEast => "SE",
            Direction::SouthWest => "SW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short())
    }
}

/// Wall-clock unit for `wait`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
}

impl TimeUnit {
    /// Milliseconds per unit.
    #[inline]
    pub const fn millis(self) -> u64 {
        match self {
            TimeUnit::Millisecond => 1,
            TimeUnit::Second => 1_000,
            TimeUnit::Minute => 60_000,
        }
    }
}

/// Pairwise comparison operator for `compare`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Comparator {
    Equal,
    NotEqual,
    Greater,
    Lesser,
    GreaterEqual,
    LesserEqual,
}

impl Comparator {
    /// Ordering comparators apply to numeric element kinds only;
    /// `equal`/`notequal` apply to every kind.
    #[inline]
    pub const fn is_ordering(self) -> bool {
        !matches!(self, Comparator::Equal | Comparator::NotEqual)
    }
}

/// A runtime value: one of the seven scalar categories or a homogeneous list.
#[derive(Clone, PartialEq, Debug)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    Coord(Coord),
    Zone(Zone),
    Direction(Direction),
    List(ListValue),
}

/// A homogeneous list with its element kind carried alongside, so an empty
/// list still knows what it is a list of.
#[derive(Clone, PartialEq, Debug)]
pub struct ListValue {
    pub elem: ValueKind,
    pub items: Vec<Value>,
}

impl ListValue {
    #[inline]
    pub fn new(elem: ValueKind, items: Vec<Value>) -> Self {
        ListValue { elem, items }
    }

    #[inline]
    pub fn empty(elem: ValueKind) -> Self {
        ListValue {
            elem,
            items: Vec::new(),
        }
    }
}

impl Value {
    /// The type this value inhabits.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Int(_) => ValueType::INT,
            Value::Float(_) => ValueType::FLOAT,
            Value::Bool(_) => ValueType::BOOL,
            Value::Str(_) => ValueType::STR,
            Value::Coord(_) => ValueType::COORD,
            Value::Zone(_) => ValueType::ZONE,
            Value::Direction(_) => ValueType::DIRECTION,
            Value::List(list) => ValueType::list_of(list.elem),
        }
    }

    /// The default value of a type: what an empty constructor yields and
    /// what loading an absent variable yields.
    pub fn default_for(ty: ValueType) -> Value {
        if ty.list {
            return Value::List(ListValue::empty(ty.kind));
        }
        match ty.kind {
            ValueKind::Int => Value::Int(0),
            ValueKind::Float => Value::Float(0.0),
            ValueKind::Bool => Value::Bool(false),
            ValueKind::Str => Value::Str(String::new()),
            ValueKind::Coord => Value::Coord(Coord::default()),
            ValueKind::Zone => Value::Zone(Zone::default()),
            // The argument-only kinds never reach the store; fall back to
            // the direction default so extraction stays total.
            ValueKind::Direction
            | ValueKind::TimeUnit
            | ValueKind::Comparator
            | ValueKind::Identifier => Value::Direction(Direction::North),
        }
    }

    /// Convert to another scalar kind where the language defines a
    /// conversion (`int(float)` truncates toward zero, `float(int)` widens);
    /// every other target is an identity pass-through.
    pub fn convert(self, to: ValueKind) -> Value {
        match (to, self) {
            (ValueKind::Int, Value::Float(f)) => Value::Int(f.trunc() as i64),
            (ValueKind::Float, Value::Int(n)) => Value::Float(n as f64),
            (_, v) => v,
        }
    }

    /// Truthiness: the boolean payload, or `false` for any non-bool.
    #[inline]
    pub fn truth(&self) -> bool {
        matches!(self, Value::Bool(true))
    }

    #[inline]
    pub fn int(&self) -> i64 {
        match self {
            Value::Int(n) => *n,
            _ => 0,
        }
    }

    #[inline]
    pub fn float(&self) -> f64 {
        match self {
            Value::Float(f) => *f,
            Value::Int(n) => *n as f64,
            _ => 0.0,
        }
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        match self {
            Value::Coord(c) => *c,
            _ => Coord::default(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => n.fmt(f),
            Value::Float(x) => x.fmt(f),
            Value::Bool(b) => b.fmt(f),
            Value::Str(s) => f.write_str(s),
            Value::Coord(c) => c.fmt(f),
            Value::Zone(z) => z.fmt(f),
            Value::Direction(d) => d.fmt(f),
            Value::List(list) => {
                f.write_str("[")?;
                for (i, item) in list.items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    item.fmt(f)?;
                }
                f.write_str("]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_round_trip_their_type() {
        for kind in ValueKind::STORABLE {
            let scalar = Value::default_for(ValueType::scalar(kind));
            assert_eq!(scalar.value_type(), ValueType::scalar(kind));
            let list = Value::default_for(ValueType::list_of(kind));
            assert_eq!(list.value_type(), ValueType::list_of(kind));
        }
    }

    #[test]
    fn int_float_conversions() {
        assert_eq!(Value::Float(3.9).convert(ValueKind::Int), Value::Int(3));
        assert_eq!(Value::Int(7).convert(ValueKind::Float), Value::Float(7.0));
        // Identity for everything else.
        assert_eq!(
            Value::Str("x".to_string()).convert(ValueKind::Str),
            Value::Str("x".to_string())
        );
    }

    #[test]
    fn truthiness_is_bool_only() {
        assert!(Value::Bool(true).truth());
        assert!(!Value::Bool(false).truth());
        assert!(!Value::Int(1).truth());
    }

    #[test]
    fn display_forms() {
        assert_eq!(Value::Coord(Coord::new(3, 4)).to_string(), "(3,4)");
        assert_eq!(
            Value::Zone(Zone::new(Coord::new(0, 0), Coord::new(8, 8))).to_string(),
            "((0,0),(8,8))"
        );
        assert_eq!(Value::Direction(Direction::NorthWest).to_string(), "NW");
        let list = Value::List(ListValue::new(
            ValueKind::Int,
            vec![Value::Int(1), Value::Int(2)],
        ));
        assert_eq!(list.to_string(), "[1,2]");
    }

    #[test]
    fn time_unit_factors() {
        assert_eq!(TimeUnit::Millisecond.millis(), 1);
        assert_eq!(TimeUnit::Second.millis(), 1_000);
        assert_eq!(TimeUnit::Minute.millis(), 60_000);
    }
}
