//! End-to-end suites: source text through lexer, parser, lowering, and
//! execution against a capturing surface.

#![expect(clippy::unwrap_used, reason = "tests use unwrap for brevity")]

use act_lexer::tokenize;
use act_parse::parse;

use crate::{BufferSurface, Script};

mod abort_tests;
mod control_tests;
mod value_tests;

/// Compile a source string, asserting it parses cleanly.
fn compile(source: &str) -> Script {
    let outcome = parse(&tokenize(source));
    assert!(
        outcome.success(),
        "parse failed: {:?}",
        outcome.diagnostics
    );
    Script::from_form(&outcome.form.unwrap())
}

/// Compile, run once, and return everything the script emitted.
fn run_output(source: &str) -> Vec<String> {
    let script = compile(source);
    let mut surface = BufferSurface::new();
    script.run(&mut surface).unwrap();
    surface.output()
}
