//! Punctuation-priority scanner.
//!
//! Repeatedly takes the next token from the remaining text: find the
//! earliest separator byte (punctuation or whitespace); any content before
//! it is the next word, otherwise the separator itself is the token.
//! Whitespace separators are dropped. A quote switches to string-literal
//! mode: everything up to the next quote is captured verbatim as one
//! literal, with no escape mechanism -- an unterminated literal runs to end
//! of input.
//!
//! The scanner performs no structural validation; output is a flat token
//! list for the parser.

use act_ir::{Token, TokenKind};

use crate::keywords;

/// Separator byte classes. Everything not in the table is word content.
#[derive(Copy, Clone, Eq, PartialEq)]
enum ByteClass {
    Word,
    Space,
    Newline,
    Quote,
    Punct,
}

const fn class_table() -> [ByteClass; 256] {
    let mut table = [ByteClass::Word; 256];
    table[b' ' as usize] = ByteClass::Space;
    table[b'\t' as usize] = ByteClass::Space;
    table[0x08] = ByteClass::Space; // backspace, a separator in script files
    table[b'\r' as usize] = ByteClass::Space;
    table[b'\n' as usize] = ByteClass::Newline;
    table[b'"' as usize] = ByteClass::Quote;
    table[b'(' as usize] = ByteClass::Punct;
    table[b')' as usize] = ByteClass::Punct;
    table[b'{' as usize] = ByteClass::Punct;
    table[b'}' as usize] = ByteClass::Punct;
    table[b'<' as usize] = ByteClass::Punct;
    table[b'>' as usize] = ByteClass::Punct;
    table[b',' as usize] = ByteClass::Punct;
    table
}

static CLASSES: [ByteClass; 256] = class_table();

#[inline]
fn class_of(byte: u8) -> ByteClass {
    CLASSES[byte as usize]
}

fn punct_kind(byte: u8) -> TokenKind {
    match byte {
        b'(' => TokenKind::OpenParen,
        b')' => TokenKind::CloseParen,
        b'{' => TokenKind::OpenBrace,
        b'}' => TokenKind::CloseBrace,
        b'<' => TokenKind::OpenAngle,
        b'>' => TokenKind::CloseAngle,
        _ => TokenKind::Comma,
    }
}

struct Scanner<'a> {
    source: &'a str,
    pos: usize,
    line: u32,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Scanner {
            source,
            pos: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    #[inline]
    fn bytes(&self) -> &'a [u8] {
        self.source.as_bytes()
    }

    fn push(&mut self, kind: TokenKind) {
        self.tokens.push(Token::new(kind, self.line));
    }

    /// Byte offset of the next separator at or after `from`.
    fn next_separator(&self, from: usize) -> usize {
        let bytes = self.bytes();
        let mut i = from;
        while i < bytes.len() && class_of(bytes[i]) == ByteClass::Word {
            i += 1;
        }
        i
    }

    /// Capture a string literal starting after the opening quote at `pos`.
    fn string_literal(&mut self) {
        let bytes = self.bytes();
        let start = self.pos + 1;
        let mut end = start;
        while end < bytes.len() && bytes[end] != b'"' {
            end += 1;
        }
        let content = &self.source[start..end];
        self.push(TokenKind::StringLiteral(content.to_string()));
        // Literals may span lines; keep the counter honest.
        self.line += content.bytes().filter(|&b| b == b'\n').count() as u32;
        // Step over the closing quote unless the literal ran to EOF.
        self.pos = if end < bytes.len() { end + 1 } else { end };
    }

    fn run(mut self) -> Vec<Token> {
        while self.pos < self.bytes().len() {
            let byte = self.bytes()[self.pos];
            match class_of(byte) {
                ByteClass::Space => self.pos += 1,
                ByteClass::Newline => {
                    self.line += 1;
                    self.pos += 1;
                }
                ByteClass::Quote => self.string_literal(),
                ByteClass::Punct => {
                    self.push(punct_kind(byte));
                    self.pos += 1;
                }
                ByteClass::Word => {
                    let end = self.next_separator(self.pos);
                    // Separator bytes are all ASCII, so the slice boundaries
                    // are valid UTF-8 boundaries.
                    let word = &self.source[self.pos..end];
                    let kind =
                        keywords::lookup(word).unwrap_or_else(|| keywords::classify_word(word));
                    self.push(kind);
                    self.pos = end;
                }
            }
        }
        self.tokens
    }
}

/// Tokenize a script source into a flat token list.
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).run()
}
