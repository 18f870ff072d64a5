//! Interpreter for programs written as JSON documents: functions whose
//! bodies are lists of actions, imports that bind names to other program
//! files or native operations, and modifiers that rewrite function
//! definitions before execution.

pub mod ast;
pub mod backend;
pub mod diagnostics;
pub mod loader;
pub mod modifier;
pub mod program;
pub mod runtime;
pub mod stdlib;
pub mod value;

pub use backend::{Backend, BackendConfig};
pub use diagnostics::{Diagnostic, DiagnosticKind, JsonLangError};
pub use loader::{FsModuleSource, ModuleSource};
pub use program::Program;
pub use runtime::{ImportTarget, Interpreter, InterpreterConfig};
pub use value::{Value, ValueKind};
