//! Token model for the Act lexer.
//!
//! One [`TokenKind`] variant per keyword, literal, and punctuation mark.
//! Tokens are a flat, unnested list; all structure is recovered by the
//! parser. Location is a 1-based source line -- the scripting surface is a
//! few dozen lines at most and diagnostics report lines, not byte offsets.

use std::fmt;

/// A lexed token with its source line.
#[derive(Clone, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, line: u32) -> Self {
        Token { kind, line }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ line {}", self.kind, self.line)
    }
}

/// Token kinds for Act.
///
/// `switch`/`case`/`default` are reserved: they lex but no parse path
/// accepts them. `<`/`>` likewise lex as punctuation with no parse path.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TokenKind {
    // Keyword forms
    Store,
    Wait,
    If,
    Else,
    Elif,
    Loop,
    DoLoop,
    And,
    Or,
    Not,
    Int,
    Float,
    Bool,
    Str,
    Coord,
    Zone,
    Direction,
    List,
    Compare,
    Main,
    Print,
    Break,
    Continue,

    // Reserved, unimplemented
    Switch,
    Case,
    Default,

    // Literals
    True,
    False,
    Second,
    Millisecond,
    Minute,
    North,
    South,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    Equal,
    NotEqual,
    Greater,
    Lesser,
    GreaterEqual,
    LesserEqual,

    // Punctuation
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    OpenAngle,
    CloseAngle,
    Comma,

    /// Unsigned decimal integer literal.
    Number(i64),
    /// `"..."` contents, captured verbatim (no escapes).
    StringLiteral(String),
    /// A word that is neither keyword, literal, nor number.
    Ident(String),
    /// An unrecognized character sequence; fails any enclosing form.
    Unknown(String),
}

impl TokenKind {
    /// The source text of this token, as written in the script.
    pub fn text(&self) -> &str {
        match self {
            TokenKind::Store => "store",
            TokenKind::Wait => "wait",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Elif => "elif",
            TokenKind::Loop => "loop",
            TokenKind::DoLoop => "doloop",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Not => "not",
            TokenKind::Int => "int",
            TokenKind::Float => "float",
            TokenKind::Bool => "bool",
            TokenKind::Str => "string",
            TokenKind::Coord => "coord",
            TokenKind::Zone => "zone",
            TokenKind::Direction => "direction",
            TokenKind::List => "list",
            TokenKind::Compare => "compare",
            TokenKind::Main => "main",
            TokenKind::Print => "print",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::Switch => "switch",
            TokenKind::Case => "case",
            TokenKind::Default => "default",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Second => "SECOND",
            TokenKind::Millisecond => "MILLISECOND",
            TokenKind::Minute => "MINUTE",
            TokenKind::North => "NORTH",
            TokenKind::South => "SOUTH",
            TokenKind::NorthEast => "NORTHE",
            TokenKind::NorthWest => "NORTHW",
            TokenKind::SouthEast => "SOUTHE",
            TokenKind::SouthWest => "SOUTHW",
            TokenKind::Equal => "equal",
            TokenKind::NotEqual => "notequal",
            TokenKind::Greater => "greater",
            TokenKind::Lesser => "lesser",
            TokenKind::GreaterEqual => "greaterequal",
            TokenKind::LesserEqual => "lesserequal",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenBrace => "{",
            TokenKind::CloseBrace => "}",
            TokenKind::OpenAngle => "<",
            TokenKind::CloseAngle => ">",
            TokenKind::Comma => ",",
            TokenKind::Number(_) => "number",
            TokenKind::StringLiteral(s) => s.as_str(),
            TokenKind::Ident(name) => name.as_str(),
            TokenKind::Unknown(text) => text.as_str(),
        }
    }

    /// Whether this kind opens a flow form with a braced body.
    #[inline]
    pub fn is_flow_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Main
                | TokenKind::If
                | TokenKind::Elif
                | TokenKind::Else
                | TokenKind::Loop
                | TokenKind::DoLoop
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => n.fmt(f),
            TokenKind::StringLiteral(s) => write!(f, "\"{s}\""),
            other => f.write_str(other.text()),
        }
    }
}
