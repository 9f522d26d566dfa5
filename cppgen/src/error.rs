use miette::Diagnostic;
use thiserror::Error;

/// Result type for emitter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by [`Emitter`](crate::Emitter).
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum Error {
    /// Output was requested while blocks or labels were still open.
    #[error("cannot extract output while {open} scope(s) are still open")]
    #[diagnostic(
        code(cppgen::unclosed_scopes),
        help("close every block, label and case scope before reading or saving the output")
    )]
    UnclosedScopes { open: usize },
}
