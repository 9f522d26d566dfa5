//! Core primitives for the cppgen source emitter.
//!
//! This crate holds the pieces that are independent of the emitter's
//! buffering engine: indentation configuration and generated-file writing.

mod file;
mod indent;

// File operations
pub use file::write_file;
// Configuration
pub use indent::Indent;
