//! Recursive-descent parser with argument-overload resolution.
//!
//! Consumes the lexer's flat token list and produces one typed [`Form`]
//! tree per script, rooted in `main`. Parsing is fail-fast: the first
//! diagnostic aborts the enclosing form and the whole script -- no recovery,
//! no partial trees, and a script that fails to parse never runs.

use act_diagnostic::{Diagnostic, DiagnosticKind};
use act_ir::{
    Comparator, Direction, Form, FormKind, PairArgs, TimeUnit, Token, TokenKind, ValueType,
};
use tracing::trace;

use crate::cursor::Cursor;
use crate::overload::{ArgInfo, OverloadSet};
use crate::registry;
use crate::symbols::SymbolTable;

/// Everything one parse pass produced: the root form on success, the
/// accumulated diagnostics, and the symbol table as of end of input.
#[derive(Debug)]
pub struct ParseOutcome {
    pub form: Option<Form>,
    pub diagnostics: Vec<Diagnostic>,
    pub symbols: SymbolTable,
}

impl ParseOutcome {
    /// A script is runnable only when it parsed in full.
    pub fn success(&self) -> bool {
        self.form.is_some() && self.diagnostics.is_empty()
    }
}

/// Parse a token list into a script form.
pub fn parse(tokens: &[Token]) -> ParseOutcome {
    let mut parser = Parser {
        cursor: Cursor::new(tokens),
        diagnostics: Vec::new(),
        symbols: SymbolTable::new(),
    };
    let form = parser.script().ok();
    ParseOutcome {
        form,
        diagnostics: parser.diagnostics,
        symbols: parser.symbols,
    }
}

/// Marker for an aborted form; the detail lives in the diagnostics.
struct Aborted;

type PResult<T> = Result<T, Aborted>;

struct Parser<'a> {
    cursor: Cursor<'a>,
    diagnostics: Vec<Diagnostic>,
    symbols: SymbolTable,
}

/// Shape the `coord`/`zone` arguments according to the winning candidate.
fn pair_args(winner: usize, args: Vec<Form>) -> PairArgs {
    let mut iter = args.into_iter();
    match (winner, iter.next(), iter.next()) {
        (1, Some(inner), None) => PairArgs::Wrap(Box::new(inner)),
        (2, Some(a), Some(b)) => PairArgs::Pair(Box::new(a), Box::new(b)),
        _ => PairArgs::Empty,
    }
}

/// Unknown tokens get their own diagnostic kind; everything else that is
/// out of place is plain unexpected.
fn unexpected(found: TokenKind) -> DiagnosticKind {
    match found {
        TokenKind::Unknown(text) => DiagnosticKind::UnknownToken { text },
        other => DiagnosticKind::Unexpected { found: other },
    }
}

impl Parser<'_> {
    fn error(&mut self, context: TokenKind, line: u32, kind: DiagnosticKind) -> Aborted {
        self.diagnostics.push(Diagnostic::new(context, line, kind));
        Aborted
    }

    /// Script = one `main` form, nothing before or after it.
    fn script(&mut self) -> PResult<Form> {
        if !self.cursor.check(&TokenKind::Main) {
            let line = self.cursor.line();
            let kind = match self.cursor.current() {
                Some(token) => unexpected(token.kind.clone()),
                None => DiagnosticKind::Missing {
                    expected: TokenKind::Main,
                },
            };
            return Err(self.error(TokenKind::Main, line, kind));
        }
        let main = self.flow_form(TokenKind::Main)?;
        if let Some(extra) = self.cursor.current() {
            let (found, line) = (extra.kind.clone(), extra.line);
            return Err(self.error(TokenKind::Main, line, unexpected(found)));
        }
        Ok(main)
    }

    /// A flow form: keyword, argument list where the keyword has one
    /// (`else` does not), then a braced body.
    fn flow_form(&mut self, kw: TokenKind) -> PResult<Form> {
        let line = self.cursor.line();
        trace!(keyword = kw.text(), line, "parsing flow form");
        self.cursor.advance();
        let kind = match kw {
            TokenKind::Else => {
                let body = self.body(&kw)?;
                FormKind::Else { body }
            }
            TokenKind::Main => {
                self.arguments(&kw, line)?;
                let body = self.body(&kw)?;
                FormKind::Main { body }
            }
            _ => {
                let (_, mut args) = self.arguments(&kw, line)?;
                let Some(cond) = args.pop().map(Box::new) else {
                    return Err(self.error(kw, line, DiagnosticKind::NoCandidate));
                };
                let body = self.body(&kw)?;
                match kw {
                    TokenKind::If => FormKind::If { cond, body },
                    TokenKind::Elif => FormKind::Elif { cond, body },
                    TokenKind::Loop => FormKind::Loop { cond, body },
                    _ => FormKind::DoLoop { cond, body },
                }
            }
        };
        Ok(Form::new(line, kind))
    }

    /// A `{ ... }` body of statements. `elif`/`else` are only admitted
    /// directly after an `if`/`elif` sibling.
    fn body(&mut self, kw: &TokenKind) -> PResult<Vec<Form>> {
        let open_line = self.cursor.line();
        if !self.cursor.eat(&TokenKind::OpenBrace) {
            let kind = match self.cursor.current() {
                Some(token) => unexpected(token.kind.clone()),
                None => DiagnosticKind::Missing {
                    expected: TokenKind::OpenBrace,
                },
            };
            return Err(self.error(kw.clone(), open_line, kind));
        }
        let mut stmts: Vec<Form> = Vec::new();
        loop {
            let Some(token) = self.cursor.current() else {
                return Err(self.error(
                    kw.clone(),
                    open_line,
                    DiagnosticKind::Missing {
                        expected: TokenKind::CloseBrace,
                    },
                ));
            };
            let (token_kind, line) = (token.kind.clone(), token.line);
            match token_kind {
                TokenKind::CloseBrace => {
                    self.cursor.advance();
                    return Ok(stmts);
                }
                TokenKind::If | TokenKind::Loop | TokenKind::DoLoop => {
                    stmts.push(self.flow_form(token_kind)?);
                }
                TokenKind::Elif | TokenKind::Else => {
                    let chained = matches!(
                        stmts.last().map(|s| &s.kind),
                        Some(FormKind::If { .. } | FormKind::Elif { .. })
                    );
                    if !chained {
                        return Err(self.error(
                            kw.clone(),
                            line,
                            DiagnosticKind::Unexpected { found: token_kind },
                        ));
                    }
                    stmts.push(self.flow_form(token_kind)?);
                }
                TokenKind::Main => {
                    return Err(self.error(
                        kw.clone(),
                        line,
                        DiagnosticKind::Unexpected { found: token_kind },
                    ));
                }
                _ => stmts.push(self.expr(kw)?),
            }
        }
    }

    /// One expression: a literal, an identifier, or a parenthesized
    /// keyword form.
    fn expr(&mut self, context: &TokenKind) -> PResult<Form> {
        let Some(token) = self.cursor.current() else {
            let line = self.cursor.line();
            return Err(self.error(
                context.clone(),
                line,
                DiagnosticKind::Missing {
                    expected: TokenKind::CloseParen,
                },
            ));
        };
        let (kind, line) = (token.kind.clone(), token.line);
        let literal = |form_kind: FormKind| Form::new(line, form_kind);
        match kind {
            TokenKind::Number(n) => {
                self.cursor.advance();
                Ok(literal(FormKind::IntLit(n)))
            }
            TokenKind::True => {
                self.cursor.advance();
                Ok(literal(FormKind::BoolLit(true)))
            }
            TokenKind::False => {
                self.cursor.advance();
                Ok(literal(FormKind::BoolLit(false)))
            }
            TokenKind::StringLiteral(text) => {
                self.cursor.advance();
                Ok(literal(FormKind::StrLit(text)))
            }
            TokenKind::North => self.direction_lit(line, Direction::North),
            TokenKind::South => self.direction_lit(line, Direction::South),
            TokenKind::NorthEast => self.direction_lit(line, Direction::NorthEast),
            TokenKind::NorthWest => self.direction_lit(line, Direction::NorthWest),
            TokenKind::SouthEast => self.direction_lit(line, Direction::SouthEast),
            TokenKind::SouthWest => self.direction_lit(line, Direction::SouthWest),
            TokenKind::Second => self.time_lit(line, TimeUnit::Second),
            TokenKind::Millisecond => self.time_lit(line, TimeUnit::Millisecond),
            TokenKind::Minute => self.time_lit(line, TimeUnit::Minute),
            TokenKind::Equal => self.cmp_lit(line, Comparator::Equal),
            TokenKind::NotEqual => self.cmp_lit(line, Comparator::NotEqual),
            TokenKind::Greater => self.cmp_lit(line, Comparator::Greater),
            TokenKind::Lesser => self.cmp_lit(line, Comparator::Lesser),
            TokenKind::GreaterEqual => self.cmp_lit(line, Comparator::GreaterEqual),
            TokenKind::LesserEqual => self.cmp_lit(line, Comparator::LesserEqual),
            TokenKind::Ident(name) => {
                self.cursor.advance();
                let ty = self.symbols.lookup(&name);
                Ok(literal(FormKind::Ident { name, ty }))
            }
            TokenKind::Int
            | TokenKind::Float
            | TokenKind::Bool
            | TokenKind::Str
            | TokenKind::Coord
            | TokenKind::Zone
            | TokenKind::Direction
            | TokenKind::List
            | TokenKind::And
            | TokenKind::Or
            | TokenKind::Not
            | TokenKind::Compare
            | TokenKind::Store
            | TokenKind::Wait
            | TokenKind::Print
            | TokenKind::Break
            | TokenKind::Continue => self.call_form(kind),
            other => Err(self.error(context.clone(), line, unexpected(other))),
        }
    }

    fn direction_lit(&mut self, line: u32, direction: Direction) -> PResult<Form> {
        self.cursor.advance();
        Ok(Form::new(line, FormKind::DirectionLit(direction)))
    }

    fn time_lit(&mut self, line: u32, unit: TimeUnit) -> PResult<Form> {
        self.cursor.advance();
        Ok(Form::new(line, FormKind::TimeLit(unit)))
    }

    fn cmp_lit(&mut self, line: u32, cmp: Comparator) -> PResult<Form> {
        self.cursor.advance();
        Ok(Form::new(line, FormKind::CmpLit(cmp)))
    }

    /// A parenthesized keyword form: consume the keyword, resolve the
    /// argument list against the keyword's overloads, build the concrete
    /// form the winning candidate selects.
    fn call_form(&mut self, kw: TokenKind) -> PResult<Form> {
        let line = self.cursor.line();
        trace!(keyword = kw.text(), line, "parsing keyword form");
        self.cursor.advance();
        let (winner, args) = self.arguments(&kw, line)?;
        self.build(kw, winner, args, line)
    }

    /// `( arg , arg , ... )` with overload bookkeeping. Returns the
    /// winning candidate index and the argument forms.
    fn arguments(&mut self, kw: &TokenKind, line: u32) -> PResult<(usize, Vec<Form>)> {
        let mut set = OverloadSet::new(registry::overloads(kw));
        if !self.cursor.eat(&TokenKind::OpenParen) {
            return Err(self.error(
                kw.clone(),
                line,
                DiagnosticKind::Missing {
                    expected: TokenKind::OpenParen,
                },
            ));
        }
        let mut args: Vec<Form> = Vec::new();
        loop {
            let Some(token) = self.cursor.current() else {
                return Err(self.error(
                    kw.clone(),
                    line,
                    DiagnosticKind::Missing {
                        expected: TokenKind::CloseParen,
                    },
                ));
            };
            let token_line = token.line;
            if token.kind == TokenKind::CloseParen {
                self.cursor.advance();
                return match set.winner() {
                    Some(winner) => Ok((winner, args)),
                    None => Err(self.error(kw.clone(), line, DiagnosticKind::NoCandidate)),
                };
            }
            if !args.is_empty() {
                if !self.cursor.eat(&TokenKind::Comma) {
                    return Err(self.error(
                        kw.clone(),
                        token_line,
                        DiagnosticKind::Missing {
                            expected: TokenKind::Comma,
                        },
                    ));
                }
                if self.cursor.check(&TokenKind::CloseParen) {
                    return Err(self.error(
                        kw.clone(),
                        token_line,
                        DiagnosticKind::Unexpected {
                            found: TokenKind::CloseParen,
                        },
                    ));
                }
            } else if self.cursor.check(&TokenKind::Comma) {
                return Err(self.error(
                    kw.clone(),
                    token_line,
                    DiagnosticKind::Unexpected {
                        found: TokenKind::Comma,
                    },
                ));
            }

            let arg_line = self.cursor.line();
            let arg_kind = self.cursor.current().map(|t| t.kind.clone());
            let arg = self.expr(kw)?;
            let info = ArgInfo {
                ty: arg.value_type(),
                is_name: matches!(arg.kind, FormKind::Ident { .. }),
            };
            if info.ty.is_none() && !info.is_name {
                // A statement form (store/wait/print/flow) in an argument slot.
                let found = arg_kind.unwrap_or(TokenKind::CloseParen);
                return Err(self.error(
                    kw.clone(),
                    arg_line,
                    DiagnosticKind::Unexpected { found },
                ));
            }
            let expected = set.expected_types();
            if !set.approve(&info) {
                let kind = match (&arg.kind, info.ty) {
                    (FormKind::Ident { name, ty: None }, _) => DiagnosticKind::UnresolvedName {
                        name: name.clone(),
                    },
                    (_, Some(found)) => DiagnosticKind::Replaced { expected, found },
                    (_, None) => DiagnosticKind::Replaced {
                        expected,
                        found: ValueType::IDENTIFIER,
                    },
                };
                return Err(self.error(kw.clone(), arg_line, kind));
            }
            args.push(arg);
        }
    }

    /// Build the concrete form for the winning candidate; the original
    /// parser calls this dispatching the collected arguments.
    fn build(
        &mut self,
        kw: TokenKind,
        winner: usize,
        args: Vec<Form>,
        line: u32,
    ) -> PResult<Form> {
        let mut args = args;
        let kind = match kw {
            TokenKind::Int => FormKind::Int(args.pop().map(Box::new)),
            TokenKind::Float => FormKind::Float(args.pop().map(Box::new)),
            TokenKind::Bool => FormKind::Bool(args.pop().map(Box::new)),
            TokenKind::Str => FormKind::Str(args.pop().map(Box::new)),
            TokenKind::Direction => FormKind::Direction(args.pop().map(Box::new)),
            TokenKind::Coord => FormKind::Coord(pair_args(winner, args)),
            TokenKind::Zone => FormKind::Zone(pair_args(winner, args)),
            TokenKind::List => FormKind::List {
                elem: registry::ELEM_KINDS[winner],
                items: args,
            },
            TokenKind::And => FormKind::And(args),
            TokenKind::Or => FormKind::Or(args),
            TokenKind::Not => {
                let Some(operand) = args.pop().map(Box::new) else {
                    return Err(self.error(kw, line, DiagnosticKind::NoCandidate));
                };
                FormKind::Not(operand)
            }
            TokenKind::Compare => return self.build_compare(winner, args, line),
            TokenKind::Store => return self.build_store(args, line),
            TokenKind::Wait => {
                let unit = match args.pop() {
                    Some(Form {
                        kind: FormKind::TimeLit(unit),
                        ..
                    }) => unit,
                    // The signatures only admit a time-unit literal here.
                    _ => TimeUnit::Second,
                };
                let Some(amount) = args.pop().map(Box::new) else {
                    return Err(self.error(kw, line, DiagnosticKind::NoCandidate));
                };
                FormKind::Wait { amount, unit }
            }
            TokenKind::Print => FormKind::Print(args),
            TokenKind::Break => FormKind::Break,
            _ => FormKind::Continue,
        };
        Ok(Form::new(line, kind))
    }

    fn build_compare(&mut self, winner: usize, args: Vec<Form>, line: u32) -> PResult<Form> {
        if winner == 0 {
            return Ok(Form::new(
                line,
                FormKind::Compare {
                    cmp: None,
                    items: Vec::new(),
                },
            ));
        }
        let elem = registry::ELEM_KINDS[winner - 1];
        let mut iter = args.into_iter();
        let (first, cmp_form) = match (iter.next(), iter.next()) {
            (Some(first), Some(cmp_form)) => (first, cmp_form),
            _ => {
                return Err(self.error(TokenKind::Compare, line, DiagnosticKind::NoCandidate));
            }
        };
        let cmp = match cmp_form.kind {
            FormKind::CmpLit(cmp) => cmp,
            // The signatures only admit a comparator literal here.
            _ => Comparator::Equal,
        };
        if cmp.is_ordering() && !elem.is_numeric() {
            return Err(self.error(
                TokenKind::Compare,
                line,
                DiagnosticKind::Replaced {
                    expected: vec![ValueType::INT, ValueType::FLOAT],
                    found: ValueType::scalar(elem),
                },
            ));
        }
        let mut items = vec![first];
        items.extend(iter);
        Ok(Form::new(
            line,
            FormKind::Compare {
                cmp: Some(cmp),
                items,
            },
        ))
    }

    fn build_store(&mut self, args: Vec<Form>, line: u32) -> PResult<Form> {
        let mut iter = args.into_iter();
        let (target, value) = match (iter.next(), iter.next()) {
            (Some(target), Some(value)) => (target, value),
            _ => return Err(self.error(TokenKind::Store, line, DiagnosticKind::NoCandidate)),
        };
        let FormKind::Ident { name, .. } = target.kind else {
            // The signatures only admit an identifier here.
            return Err(self.error(TokenKind::Store, line, DiagnosticKind::NoCandidate));
        };
        let Some(ty) = value.value_type() else {
            return Err(self.error(TokenKind::Store, line, DiagnosticKind::NoCandidate));
        };
        self.symbols.define(&name, ty);
        Ok(Form::new(
            line,
            FormKind::Store {
                name,
                value: Box::new(value),
            },
        ))
    }
}
