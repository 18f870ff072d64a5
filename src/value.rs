use std::{fmt, rc::Rc};

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::diagnostics::{Diagnostic, DiagnosticKind};

#[derive(Clone, PartialEq)]
pub struct Value(pub Rc<ValueKind>);

impl Value {
    pub fn new(kind: ValueKind) -> Self {
        Self(Rc::new(kind))
    }

    pub fn nil() -> Self {
        Self::new(ValueKind::Nil)
    }

    pub fn bool(value: bool) -> Self {
        Self::new(ValueKind::Bool(value))
    }

    pub fn number(value: f64) -> Self {
        Self::new(ValueKind::Number(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::new(ValueKind::String(value.into()))
    }

    pub fn list(values: Vec<Value>) -> Self {
        Self::new(ValueKind::List(values))
    }

    pub fn map(entries: IndexMap<String, Value>) -> Self {
        Self::new(ValueKind::Map(entries))
    }

    pub fn error(diagnostic: Diagnostic) -> Self {
        Self::new(ValueKind::Error(diagnostic))
    }

    pub fn error_kind(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self::error(Diagnostic::new(kind, message))
    }

    /// Converts decoded JSON into a runtime value. Objects stay maps so that
    /// pre-evaluated structures pass through calls untouched.
    pub fn from_json(json: &JsonValue) -> Self {
        match json {
            JsonValue::Null => Self::nil(),
            JsonValue::Bool(b) => Self::bool(*b),
            JsonValue::Number(n) => Self::number(n.as_f64().unwrap_or(0.0)),
            JsonValue::String(s) => Self::string(s.clone()),
            JsonValue::Array(items) => Self::list(items.iter().map(Self::from_json).collect()),
            JsonValue::Object(fields) => Self::map(
                fields
                    .iter()
                    .map(|(key, value)| (key.clone(), Self::from_json(value)))
                    .collect(),
            ),
        }
    }

    pub fn kind(&self) -> &ValueKind {
        &self.0
    }

    pub fn type_name(&self) -> &'static str {
        match &*self.0 {
            ValueKind::Nil => "Nil",
            ValueKind::Bool(_) => "Boolean",
            ValueKind::Number(_) => "Number",
            ValueKind::String(_) => "String",
            ValueKind::List(_) => "List",
            ValueKind::Map(_) => "Map",
            ValueKind::Error(_) => "Error",
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(&*self.0, ValueKind::Nil)
    }

    pub fn is_error(&self) -> bool {
        matches!(&*self.0, ValueKind::Error(_))
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match &*self.0 {
            ValueKind::List(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &*self.0 {
            ValueKind::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_diagnostic(&self) -> Option<&Diagnostic> {
        match &*self.0 {
            ValueKind::Error(diagnostic) => Some(diagnostic),
            _ => None,
        }
    }

    /// Numeric coercion: unparseable strings and non-scalar values become 0.
    pub fn to_number(&self) -> f64 {
        match &*self.0 {
            ValueKind::Number(n) => *n,
            ValueKind::String(s) => s.parse::<f64>().unwrap_or(0.0),
            ValueKind::Bool(true) => 1.0,
            ValueKind::Bool(false) => 0.0,
            _ => 0.0,
        }
    }

    /// Boolean coercion. Strings are true only for `true`, `1`, `yes`, `on`;
    /// lists, maps and errors count as true because they are non-nil.
    pub fn to_boolean(&self) -> bool {
        match &*self.0 {
            ValueKind::Bool(b) => *b,
            ValueKind::String(s) => matches!(s.as_str(), "true" | "1" | "yes" | "on"),
            ValueKind::Number(n) => *n != 0.0,
            ValueKind::Nil => false,
            ValueKind::List(_) | ValueKind::Map(_) | ValueKind::Error(_) => true,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::string(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::string(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Self::list(values)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.0 {
            ValueKind::Nil => write!(f, "nil"),
            ValueKind::Bool(b) => write!(f, "{b}"),
            ValueKind::Number(n) => write!(f, "{n}"),
            ValueKind::String(s) => write!(f, "\"{s}\""),
            ValueKind::List(values) => f.debug_list().entries(values.iter()).finish(),
            ValueKind::Map(map) => f.debug_map().entries(map.iter()).finish(),
            ValueKind::Error(diagnostic) => write!(f, "<error {diagnostic}>"),
        }
    }
}

/// The string coercion of a value. Numbers print with the fewest digits
/// that round-trip, so `3.0` renders as `3`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.0 {
            ValueKind::Nil => write!(f, "nil"),
            ValueKind::Bool(b) => write!(f, "{b}"),
            ValueKind::Number(n) => write!(f, "{n}"),
            ValueKind::String(s) => write!(f, "{s}"),
            ValueKind::List(values) => {
                write!(f, "[")?;
                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            }
            ValueKind::Map(map) => {
                write!(f, "{{")?;
                for (idx, (key, value)) in map.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
            ValueKind::Error(diagnostic) => write!(f, "error: {}", diagnostic.message),
        }
    }
}

#[derive(Clone, PartialEq)]
pub enum ValueKind {
    Nil,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
    Error(Diagnostic),
}
