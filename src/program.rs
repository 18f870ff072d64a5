use std::{fmt, fs, path::Path, rc::Rc};

use indexmap::{map::Entry, IndexMap};
use serde_json::{Map as JsonMap, Value as JsonValue};
use tracing::debug;

use crate::{
    ast::{FunctionDef, ModifierDef},
    diagnostics::{Diagnostic, DiagnosticKind, Result},
    loader::{self, FsModuleSource, ModuleSource},
};

/// A loaded unit of the language together with the modules it has pulled
/// in so far.
pub struct Program {
    pub metadata: JsonMap<String, JsonValue>,
    pub imports: IndexMap<String, String>,
    pub functions: IndexMap<String, FunctionDef>,
    pub modifiers: Vec<ModifierDef>,
    modules: IndexMap<String, Program>,
    source: Rc<dyn ModuleSource>,
}

impl Program {
    /// Builds a program from decoded JSON. Missing or wrongly typed sections
    /// load as empty; import targets that are not strings are dropped.
    pub fn from_json(document: &JsonValue, source: Rc<dyn ModuleSource>) -> Self {
        let section = |key: &str| document.get(key).and_then(JsonValue::as_object);

        let metadata = section("metadata").cloned().unwrap_or_default();
        let imports = section("imports")
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|(name, target)| {
                        target.as_str().map(|target| (name.clone(), target.to_string()))
                    })
                    .collect()
            })
            .unwrap_or_default();
        let functions = section("functions")
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|(name, def)| {
                        def.as_object()
                            .map(|fields| (name.clone(), FunctionDef::from_json(fields)))
                    })
                    .collect()
            })
            .unwrap_or_default();
        let modifiers = document
            .get("modifiers")
            .and_then(JsonValue::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(JsonValue::as_object)
                    .map(ModifierDef::from_json)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            metadata,
            imports,
            functions,
            modifiers,
            modules: IndexMap::new(),
            source,
        }
    }

    /// Parses an entry program. Unlike modules, an entry program must be a
    /// JSON object with a `functions` object.
    pub fn parse(text: &str, source: Rc<dyn ModuleSource>) -> Result<Self> {
        let document: JsonValue = serde_json::from_str(text)?;
        if !document.is_object() {
            return Err(Diagnostic::new(
                DiagnosticKind::Structure,
                "program must be a JSON object",
            )
            .into());
        }
        if !document.get("functions").is_some_and(JsonValue::is_object) {
            return Err(Diagnostic::new(
                DiagnosticKind::Structure,
                "program is missing the `functions` field",
            )
            .into());
        }
        Ok(Self::from_json(&document, source))
    }

    /// Reads an entry program from disk. Modules it imports are resolved
    /// against the working directory.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text, Rc::new(FsModuleSource::current_dir()))
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn get_function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(name)
    }

    pub fn source(&self) -> &Rc<dyn ModuleSource> {
        &self.source
    }

    /// Whether `reference` has already been loaded through this program.
    pub fn is_module_cached(&self, reference: &str) -> bool {
        self.modules.contains_key(reference)
    }

    /// Returns the module for `reference`, loading it on first use. The cache
    /// is keyed by the literal reference, so two spellings of one file load
    /// it twice.
    pub fn load_module(&mut self, reference: &str) -> std::result::Result<&mut Program, Diagnostic> {
        match self.modules.entry(reference.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let module = read_module(&self.source, reference)?;
                Ok(entry.insert(module))
            }
        }
    }
}

fn read_module(
    source: &Rc<dyn ModuleSource>,
    reference: &str,
) -> std::result::Result<Program, Diagnostic> {
    let Some(path) = loader::locate(source.as_ref(), reference) else {
        return Err(Diagnostic::new(
            DiagnosticKind::ModuleNotFound,
            format!("module `{reference}` not found"),
        )
        .with_note(format!(
            "tried {}",
            loader::candidate_paths(reference).join(", ")
        )));
    };
    debug!(reference, path = %path, "loading module");

    let parse_error = |detail: String| {
        Diagnostic::new(
            DiagnosticKind::ModuleParseError,
            format!("module `{reference}` could not be loaded from `{path}`"),
        )
        .with_note(detail)
    };
    let text = source.read(&path).map_err(|err| parse_error(err.to_string()))?;
    let document: JsonValue =
        serde_json::from_str(&text).map_err(|err| parse_error(err.to_string()))?;
    if !(document.is_object() || document.is_null()) {
        return Err(parse_error(format!(
            "expected a JSON object, found {}",
            json_kind(&document)
        )));
    }
    Ok(Program::from_json(&document, Rc::clone(source)))
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Program")
            .field("imports", &self.imports)
            .field("functions", &self.functions.keys().collect::<Vec<_>>())
            .field("modifiers", &self.modifiers.len())
            .field("modules", &self.modules.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
