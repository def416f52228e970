//! dllgen scrapes exported C declarations and their doc comments from
//! header files, then emits foreign-function binding stubs.
//!
//! The pipeline is:
//!
//! 1. [`parser::declaration`] finds every `EXTERN_C_API <type> <name>(...)`
//! 2. [`parser::comment`] walks backward from each match to pick up its doc comment
//! 3. [`model::BindingModel`] collects the results in source order
//! 4. an [`emit::Emitter`] formats the model (C# `DllImport` or JSON)

pub mod emit;
pub mod error;
pub mod model;
pub mod parser;
pub mod types;

pub use error::ParseError;
pub use model::{BindingModel, DocComment, FunctionDeclaration, Parameter};
pub use types::PrimitiveType;

/// Marker macro that flags a declaration as exported.
pub const DEFAULT_MARKER: &str = "EXTERN_C_API";
