use std::path::Path;

use tracing::{debug, debug_span, trace, warn};

use crate::{
    ast::{ActionNode, Argument},
    backend::Backend,
    diagnostics::{Diagnostic, DiagnosticKind, Result},
    modifier,
    program::Program,
    value::Value,
};

pub const ENTRY_FUNCTION: &str = "main";
pub const DEFAULT_MAX_CALL_DEPTH: usize = 512;

#[derive(Debug, Clone)]
pub struct InterpreterConfig {
    /// Nesting limit for user-function calls, counted across modules.
    pub max_call_depth: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }
}

/// How an imports entry is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportTarget<'a> {
    /// A function inside another program file.
    Module { path: &'a str, function: &'a str },
    /// A native operation.
    Backend(&'a str),
}

impl<'a> ImportTarget<'a> {
    /// `jsonlang.x.y` names backend operation `y`; any other dotted reference
    /// is `module.path.function`; a plain name is a backend operation.
    pub fn parse(reference: &'a str) -> Self {
        if let Some(rest) = reference.strip_prefix("jsonlang.") {
            return ImportTarget::Backend(crate::loader::last_segment(rest));
        }
        match reference.rsplit_once('.') {
            Some((path, function)) => ImportTarget::Module { path, function },
            None => ImportTarget::Backend(reference),
        }
    }
}

/// Walks function bodies and routes calls to user functions, imported
/// modules, or the backend.
///
/// Evaluation is depth-first and recursive; every nested user call uses
/// native stack, which is why the depth is bounded by
/// [`InterpreterConfig::max_call_depth`].
pub struct Interpreter {
    backend: Backend,
    config: InterpreterConfig,
    depth: usize,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_backend(Backend::new())
    }

    pub fn with_backend(backend: Backend) -> Self {
        Self::with_config(backend, InterpreterConfig::default())
    }

    pub fn with_config(backend: Backend, config: InterpreterConfig) -> Self {
        Self {
            backend,
            config,
            depth: 0,
        }
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    /// Loads the program at `path` and runs it.
    pub fn run_path(&mut self, path: &Path) -> Result<Value> {
        let mut program = Program::from_path(path)?;
        self.run(&mut program)
    }

    /// Applies the program's modifiers, then executes `main`. Only a missing
    /// entry point is an error here; everything that fails while running is
    /// part of the returned value.
    pub fn run(&mut self, program: &mut Program) -> Result<Value> {
        modifier::apply_modifiers(program);
        if !program.has_function(ENTRY_FUNCTION) {
            return Err(Diagnostic::new(
                DiagnosticKind::Structure,
                format!("program has no `{ENTRY_FUNCTION}` function"),
            )
            .into());
        }
        debug!("starting program");
        Ok(self.execute_function(program, ENTRY_FUNCTION, &[]))
    }

    /// Runs the actions of `name` in order. The result is the value of the
    /// last `function_call` action, or nil when there was none.
    ///
    /// `args` are accepted but not bound; bodies have no variables to bind
    /// them to.
    pub fn execute_function(&mut self, program: &mut Program, name: &str, args: &[Value]) -> Value {
        let Some(function) = program.get_function(name) else {
            return Value::error_kind(
                DiagnosticKind::UndefinedFunction,
                format!("function `{name}` is not defined"),
            );
        };
        let Some(actions) = function.actions.clone() else {
            return Value::error_kind(
                DiagnosticKind::MissingActions,
                format!("function `{name}` has no actions"),
            );
        };
        if self.depth >= self.config.max_call_depth {
            return Value::error(
                Diagnostic::new(
                    DiagnosticKind::CallDepthExceeded,
                    format!("call depth limit reached while calling `{name}`"),
                )
                .with_note(format!("limit: {}", self.config.max_call_depth)),
            );
        }

        let _span = debug_span!("function", name, args = args.len()).entered();
        self.depth += 1;
        let mut result = Value::nil();
        for action in actions.iter() {
            match action {
                ActionNode::FunctionCall { function, args } => {
                    result = match function {
                        Some(callee) => {
                            let evaluated = args.iter().map(Argument::evaluate).collect();
                            self.resolve_call(program, callee, evaluated)
                        }
                        None => Value::error_kind(
                            DiagnosticKind::MalformedAction,
                            "`function_call` action is missing its `function` field",
                        ),
                    };
                    if let Some(diagnostic) = result.as_diagnostic() {
                        debug!(%diagnostic, "call produced an error value");
                    }
                }
                ActionNode::VariableDeclaration(_)
                | ActionNode::Assignment(_)
                | ActionNode::IfStatement(_)
                | ActionNode::Loop(_)
                | ActionNode::Return(_)
                | ActionNode::Literal(_) => {
                    trace!(tag = action.tag(), "action has no effect");
                }
                ActionNode::Unrecognized(tag) => {
                    warn!(function = name, tag = %tag, "skipping unrecognized action");
                }
            }
        }
        self.depth -= 1;
        result
    }

    /// Decides what `name` refers to from where it is found:
    /// 1. a function of `program`;
    /// 2. an imports entry, dispatched per [`ImportTarget`];
    /// 3. `imports.<target>`: the first imports entry, in declaration order,
    ///    whose target equals `<target>` is dispatched by its own name;
    ///    without one, `<target>` goes to the backend;
    /// 4. a backend operation.
    pub fn resolve_call(&mut self, program: &mut Program, name: &str, args: Vec<Value>) -> Value {
        if program.has_function(name) {
            trace!(name, "resolved to local function");
            return self.execute_function(program, name, &args);
        }
        if let Some(reference) = program.imports.get(name).cloned() {
            return self.call_import(program, &reference, args);
        }
        if let Some(target) = name.strip_prefix("imports.") {
            let entry = program
                .imports
                .iter()
                .find(|(_, reference)| reference.as_str() == target)
                .map(|(entry, _)| entry.clone());
            return match entry {
                Some(entry) => self.call_import(program, &entry, args),
                None => self.backend.execute(target, &args),
            };
        }
        self.backend.execute(name, &args)
    }

    fn call_import(&mut self, program: &mut Program, reference: &str, args: Vec<Value>) -> Value {
        match ImportTarget::parse(reference) {
            ImportTarget::Module { path, function } => {
                trace!(reference, path, function, "resolved to module import");
                let module = match program.load_module(path) {
                    Ok(module) => module,
                    Err(diagnostic) => {
                        return Value::error(
                            diagnostic.with_note(format!("while importing `{reference}`")),
                        );
                    }
                };
                if !module.has_function(function) {
                    return Value::error_kind(
                        DiagnosticKind::ModuleFunctionNotFound,
                        format!("module `{path}` has no function `{function}`"),
                    );
                }
                self.execute_function(module, function, &args)
            }
            ImportTarget::Backend(operation) => {
                trace!(reference, operation, "resolved to backend import");
                self.backend.execute(operation, &args)
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
