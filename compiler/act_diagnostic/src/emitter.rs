//! Terminal emitter.

use crate::diagnostic::Diagnostic;

/// Render a batch of diagnostics, one per line, in source order.
pub fn render_all(diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();
    for diagnostic in diagnostics {
        out.push_str(&diagnostic.to_string());
        out.push('\n');
    }
    out
}

/// Print a batch of diagnostics to stderr.
pub fn emit_all(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("{diagnostic}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticKind;
    use act_ir::TokenKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn render_all_is_one_line_per_diagnostic() {
        let diagnostics = vec![
            Diagnostic::new(TokenKind::Main, 1, DiagnosticKind::NoCandidate),
            Diagnostic::new(
                TokenKind::If,
                2,
                DiagnosticKind::Unexpected {
                    found: TokenKind::Comma,
                },
            ),
        ];
        let text = render_all(&diagnostics);
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("error[P0006]"));
        assert!(text.contains("error[P0002]"));
    }
}
