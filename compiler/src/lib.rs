//! remote-shims-compiler
//!
//! This crate implements:
//!  1) An ordered line grammar for wasm-bindgen style `.d.ts` files,
//!  2) A type registry mapping type names to marshal categories,
//!  3) Promise unwrapping and argument marshaling (transfer lists),
//!  4) Shim emission (`generate_shims` → `String`), one stub per operation,
//!  5) Configuration (`ShimConfig`) and error types (`ShimError`).
//!
//! The output is a best-effort translation meant to be reviewed by hand.

pub mod error;
pub mod types;
pub mod utils;
pub mod config;
pub mod parser;
pub mod registry;
pub mod emitter;
pub mod compiler;

pub use compiler::dump_parsed_file;
pub use compiler::emit_file;
pub use compiler::generate_shims;
pub use compiler::parse_file;
pub use compiler::ParsedFile;
pub use config::ShimConfig;
pub use error::ShimError;
pub use registry::TypeRegistry;
pub use types::MarshalCategory;
