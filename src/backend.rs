use std::{
    cell::{RefCell, RefMut},
    fs,
    io::Write,
    path::PathBuf,
};

use indexmap::IndexMap;
use rand::{rngs::StdRng, SeedableRng};
use serde_json::Value as JsonValue;
use tracing::{debug, info, warn};

use crate::{
    diagnostics::{Diagnostic, DiagnosticKind},
    stdlib::{self, NativeFunction},
    value::Value,
};

pub const BACKEND_NAME: &str = "rust";
pub const BACKEND_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Where the backend finds its operation descriptor.
#[derive(Debug, Clone, Default)]
pub struct BackendConfig {
    pub descriptor: Option<PathBuf>,
}

/// Provider of the native operations that interpreted code calls into.
///
/// The registry is filled once during construction and never changes
/// afterwards. The random generator and the output sink are the only state
/// operations may touch.
pub struct Backend {
    registry: IndexMap<String, NativeFunction>,
    rng: RefCell<StdRng>,
    output: RefCell<Box<dyn Write>>,
}

impl Backend {
    /// A backend with the default operations, writing to stdout.
    pub fn new() -> Self {
        Self::from_descriptor(None)
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        let descriptor = config.descriptor.as_ref().and_then(|path| {
            let text = match fs::read_to_string(path) {
                Ok(text) => text,
                Err(err) => {
                    info!(path = %path.display(), %err, "backend descriptor unavailable, using defaults");
                    return None;
                }
            };
            match serde_json::from_str::<JsonValue>(&text) {
                Ok(document) => Some(document),
                Err(err) => {
                    warn!(path = %path.display(), %err, "backend descriptor is not valid JSON, using defaults");
                    None
                }
            }
        });
        Self::from_descriptor(descriptor.as_ref())
    }

    /// Builds the registry from a descriptor of the form
    /// `{"functions": {name: {"implementation": id}}}`. Without a usable
    /// `functions` object every default operation is registered.
    pub fn from_descriptor(descriptor: Option<&JsonValue>) -> Self {
        let functions = descriptor
            .and_then(|document| document.get("functions"))
            .and_then(JsonValue::as_object);
        let registry = match functions {
            Some(entries) => {
                let mut registry = IndexMap::new();
                for (name, info) in entries {
                    let Some(id) = info.get("implementation").and_then(JsonValue::as_str) else {
                        warn!(operation = %name, "descriptor entry has no implementation id");
                        continue;
                    };
                    match stdlib::by_implementation(id) {
                        Some(function) => {
                            registry.insert(name.clone(), function);
                        }
                        None => warn!(operation = %name, implementation = id, "unknown implementation"),
                    }
                }
                registry
            }
            None => stdlib::DEFAULT_OPERATIONS
                .iter()
                .map(|(name, function)| (name.to_string(), *function))
                .collect(),
        };
        debug!(operations = registry.len(), "backend registry built");
        Self {
            registry,
            rng: RefCell::new(StdRng::from_os_rng()),
            output: RefCell::new(Box::new(std::io::stdout())),
        }
    }

    /// Redirects everything the print operations write.
    pub fn with_output(self, output: impl Write + 'static) -> Self {
        Self {
            output: RefCell::new(Box::new(output)),
            ..self
        }
    }

    /// Replaces the generator with a deterministic one.
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
            ..self
        }
    }

    pub fn name(&self) -> &str {
        BACKEND_NAME
    }

    pub fn version(&self) -> &str {
        BACKEND_VERSION
    }

    pub fn has_operation(&self, name: &str) -> bool {
        self.registry.contains_key(name)
    }

    /// Registered operation names, in registration order.
    pub fn operation_names(&self) -> impl Iterator<Item = &str> {
        self.registry.keys().map(String::as_str)
    }

    /// Runs an operation. Unknown names and failing operations come back as
    /// error values.
    pub fn execute(&self, name: &str, args: &[Value]) -> Value {
        let Some(function) = self.registry.get(name) else {
            return Value::error(Diagnostic::new(
                DiagnosticKind::UndefinedFunction,
                format!("function `{name}` is not defined"),
            ));
        };
        debug!(operation = name, implementation = function.name, args = args.len(), "backend call");
        function.call(self, args).unwrap_or_else(Value::error)
    }

    pub(crate) fn output(&self) -> RefMut<'_, Box<dyn Write>> {
        self.output.borrow_mut()
    }

    pub(crate) fn rng(&self) -> RefMut<'_, StdRng> {
        self.rng.borrow_mut()
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::new()
    }
}
