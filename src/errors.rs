//! Error types with rich diagnostics using miette
//!
//! Only the parser can fail; the explanation engine itself has no
//! recoverable errors (unknown command variants are unrepresentable, and
//! degenerate numerics are rendered as literal text).

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors that occur while parsing path data
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("unexpected token")]
    #[diagnostic(code(pathprose::parse::unexpected_token))]
    UnexpectedToken {
        #[source_code]
        src: NamedSource<String>,
        #[label("found this")]
        span: SourceSpan,
        expected: String,
    },

    #[error("invalid number: {message}")]
    #[diagnostic(code(pathprose::parse::invalid_number))]
    InvalidNumber {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid number")]
        span: SourceSpan,
    },
}
