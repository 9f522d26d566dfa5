//! Indentation-aware emitter for C and C++ source code.
//!
//! [`Emitter`] tracks indentation depth and buffers nested scopes so that
//! generator code can emit statements, blocks, labels and comments without
//! computing whitespace by hand. The emitter only formats text; it never
//! checks that the generated code is valid C or C++.
//!
//! # Module Organization
//!
//! - [`Emitter`] - Writes, statements, scopes and output extraction
//! - [`Scope`] - Guard returned by scoped operations, closes the scope on drop
//! - [`BlockStyle`] - Inline vs. multi-line block formatting
//! - [`Error`] - Failure to extract output while scopes are open

mod emitter;
mod error;
mod scope;

pub use cppgen_core::Indent;
pub use emitter::Emitter;
pub use error::{Error, Result};
pub use scope::{BlockStyle, Scope};
