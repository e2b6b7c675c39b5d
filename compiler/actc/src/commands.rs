//! CLI commands: `check`, `run`, `tokens`.
//!
//! Execution is all-or-nothing: a script with any diagnostic never begins
//! to run.

use std::fs;

use act_diagnostic::emitter;
use act_eval::{Script, StdoutSurface};
use act_lexer::tokenize;
use act_parse::{parse, ParseOutcome};
use tracing::debug;

fn read_script(path: &str) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(source) => Some(source),
        Err(err) => {
            eprintln!("error: cannot read `{path}`: {err}");
            None
        }
    }
}

fn parse_script(source: &str) -> ParseOutcome {
    let tokens = tokenize(source);
    debug!(tokens = tokens.len(), "lexed script");
    parse(&tokens)
}

/// Parse a script and report diagnostics without executing anything.
pub fn check_file(path: &str) -> i32 {
    let Some(source) = read_script(path) else {
        return 1;
    };
    let outcome = parse_script(&source);
    if outcome.success() {
        println!("{path}: ok");
        0
    } else {
        emitter::emit_all(&outcome.diagnostics);
        1
    }
}

/// Parse and execute a script against the stdout surface.
pub fn run_file(path: &str) -> i32 {
    let Some(source) = read_script(path) else {
        return 1;
    };
    let outcome = parse_script(&source);
    let Some(form) = outcome.form.filter(|_| outcome.diagnostics.is_empty()) else {
        emitter::emit_all(&outcome.diagnostics);
        return 1;
    };
    let script = Script::from_form(&form);
    let mut surface = StdoutSurface;
    match script.run(&mut surface) {
        Ok(()) => 0,
        Err(interrupt) => {
            eprintln!("{interrupt}");
            1
        }
    }
}

/// Dump the token list, one token per line.
pub fn tokens_file(path: &str) -> i32 {
    let Some(source) = read_script(path) else {
        return 1;
    };
    for token in tokenize(&source) {
        println!("{:>4}  {}", token.line, token.kind);
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_files_fail_without_panicking() {
        assert_eq!(check_file("/no/such/script.act"), 1);
        assert_eq!(run_file("/no/such/script.act"), 1);
        assert_eq!(tokens_file("/no/such/script.act"), 1);
    }
}
