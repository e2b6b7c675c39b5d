//! Keyword and literal resolution.
//!
//! A single length-bucketed lookup resolves reserved words -- keyword forms,
//! the reserved-but-unparsed `switch`/`case`/`default`, and the literal
//! vocabulary (booleans, time units, directions, comparators). Everything
//! the table rejects is classified by [`classify_word`] as a number, an
//! identifier, or an unknown sequence.

use act_ir::TokenKind;

/// Look up a reserved word by text.
///
/// Returns `None` for regular identifiers. Uses the word's length as a
/// first-pass filter; all reserved words are 2–12 characters.
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let len = text.len();
    if !(2..=12).contains(&len) {
        return None;
    }

    match len {
        2 => match text {
            "if" => Some(TokenKind::If),
            "or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match text {
            "and" => Some(TokenKind::And),
            "int" => Some(TokenKind::Int),
            "not" => Some(TokenKind::Not),
            _ => None,
        },
        4 => match text {
            "bool" => Some(TokenKind::Bool),
            "case" => Some(TokenKind::Case),
            "elif" => Some(TokenKind::Elif),
            "else" => Some(TokenKind::Else),
            "list" => Some(TokenKind::List),
            "loop" => Some(TokenKind::Loop),
            "main" => Some(TokenKind::Main),
            "true" => Some(TokenKind::True),
            "wait" => Some(TokenKind::Wait),
            "zone" => Some(TokenKind::Zone),
            _ => None,
        },
        5 => match text {
            "break" => Some(TokenKind::Break),
            "coord" => Some(TokenKind::Coord),
            "equal" => Some(TokenKind::Equal),
            "false" => Some(TokenKind::False),
            "float" => Some(TokenKind::Float),
            "print" => Some(TokenKind::Print),
            "store" => Some(TokenKind::Store),
            "NORTH" => Some(TokenKind::North),
            "SOUTH" => Some(TokenKind::South),
            _ => None,
        },
        6 => match text {
            "doloop" => Some(TokenKind::DoLoop),
            "lesser" => Some(TokenKind::Lesser),
            "string" => Some(TokenKind::Str),
            "switch" => Some(TokenKind::Switch),
            "MINUTE" => Some(TokenKind::Minute),
            "NORTHE" => Some(TokenKind::NorthEast),
            "NORTHW" => Some(TokenKind::NorthWest),
            "SECOND" => Some(TokenKind::Second),
            "SOUTHE" => Some(TokenKind::SouthEast),
            "SOUTHW" => Some(TokenKind::SouthWest),
            _ => None,
        },
        7 => match text {
            "compare" => Some(TokenKind::Compare),
            "default" => Some(TokenKind::Default),
            "greater" => Some(TokenKind::Greater),
            _ => None,
        },
        8 => match text {
            "continue" => Some(TokenKind::Continue),
            "notequal" => Some(TokenKind::NotEqual),
            _ => None,
        },
        9 => match text {
            "direction" => Some(TokenKind::Direction),
            _ => None,
        },
        11 => match text {
            "lesserequal" => Some(TokenKind::LesserEqual),
            "MILLISECOND" => Some(TokenKind::Millisecond),
            _ => None,
        },
        12 => match text {
            "greaterequal" => Some(TokenKind::GreaterEqual),
            _ => None,
        },
        _ => None,
    }
}

/// Classify a non-reserved word.
///
/// A pure digit run is an integer literal (overflowing `i64` makes it an
/// unknown token); any other ASCII-alphanumeric word is an identifier;
/// everything else is unknown and will fail whatever form encloses it.
pub(crate) fn classify_word(text: &str) -> TokenKind {
    let bytes = text.as_bytes();
    if bytes.iter().all(u8::is_ascii_digit) {
        return match text.parse::<i64>() {
            Ok(n) => TokenKind::Number(n),
            Err(_) => TokenKind::Unknown(text.to_string()),
        };
    }
    if bytes.iter().all(u8::is_ascii_alphanumeric) {
        return TokenKind::Ident(text.to_string());
    }
    TokenKind::Unknown(text.to_string())
}
