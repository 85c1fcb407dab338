//! Command handlers for the `jlscan` CLI.
//!
//! Handlers return rendered output or a [`CliError`]; printing and exit
//! codes are left to `main`.

use std::fmt::Write as _;

use crate::error::CliError;
use crate::tokenize::tokenize;

/// Options for `jlscan lex`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Leave whitespace and comments out of the listing.
    pub hide_trivia: bool,
    /// Show each token's source text.
    pub show_text: bool,
}

/// Parse `lex` options (everything after the file path).
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, CliError> {
    let mut options = LexOptions::default();
    for arg in args {
        match arg.as_str() {
            "--no-trivia" => options.hide_trivia = true,
            "--text" | "-t" => options.show_text = true,
            other => return Err(CliError::UnknownOption(other.to_owned())),
        }
    }
    Ok(options)
}

/// Read a source file as UTF-8.
pub fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| CliError::from_read(path, e))
}

/// Lex a file and render its token stream.
pub fn lex_file(path: &str, options: &LexOptions) -> Result<String, CliError> {
    let content = read_file(path)?;
    render_tokens(path, &content, options)
}

/// Render the token stream of `source`, one token per line.
pub fn render_tokens(name: &str, source: &str, options: &LexOptions) -> Result<String, CliError> {
    let tokens = tokenize(source)?;
    let shown: Vec<_> = tokens
        .iter()
        .filter(|t| !(options.hide_trivia && t.kind.is_trivia()))
        .collect();

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "Tokens for '{name}' ({} tokens):", shown.len());
    for token in shown {
        let span = token.span.to_string();
        if options.show_text {
            let _ = writeln!(
                out,
                "  {span:<12} {:<40} {:?}",
                token.kind.name(),
                token.text(source)
            );
        } else {
            let _ = writeln!(out, "  {span:<12} {}", token.kind.name());
        }
    }
    Ok(out)
}
