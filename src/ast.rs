//! Decoded form of the JSON documents that make up a program: function
//! definitions, their action lists, and modifier rules.
//!
//! Decoding is lenient. Malformed entries are dropped or kept as raw JSON
//! instead of failing the whole document, because only the entry program's
//! overall shape is a load-time error.

use std::rc::Rc;

use indexmap::IndexMap;
use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::value::Value;

/// The fields of a function definition that the runtime understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionField {
    Args,
    Return,
    Modifiers,
    Visibility,
    Actions,
}

impl FunctionField {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "args" => Some(Self::Args),
            "return" => Some(Self::Return),
            "modifiers" => Some(Self::Modifiers),
            "visibility" => Some(Self::Visibility),
            "actions" => Some(Self::Actions),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FunctionDef {
    pub args: Option<JsonValue>,
    pub return_type: Option<JsonValue>,
    pub modifiers: Option<JsonValue>,
    pub visibility: Option<JsonValue>,
    /// `None` when the definition has no `actions` array.
    pub actions: Option<Rc<[ActionNode]>>,
    /// Every key the runtime does not interpret, kept verbatim.
    pub extra: IndexMap<String, JsonValue>,
}

impl FunctionDef {
    pub fn from_json(fields: &JsonMap<String, JsonValue>) -> Self {
        let mut def = Self::default();
        for (key, value) in fields {
            def.set_field(key, value.clone());
        }
        def
    }

    /// Whether `field` is present in the definition. A key present with a
    /// JSON `null` counts as present.
    pub fn has_field(&self, field: FunctionField) -> bool {
        match field {
            FunctionField::Args => self.args.is_some(),
            FunctionField::Return => self.return_type.is_some(),
            FunctionField::Modifiers => self.modifiers.is_some(),
            FunctionField::Visibility => self.visibility.is_some(),
            FunctionField::Actions => self.actions.is_some(),
        }
    }

    /// Adds or overwrites a field by its JSON key.
    pub fn set_field(&mut self, key: &str, value: JsonValue) {
        match FunctionField::from_key(key) {
            Some(FunctionField::Args) => self.args = Some(value),
            Some(FunctionField::Return) => self.return_type = Some(value),
            Some(FunctionField::Modifiers) => self.modifiers = Some(value),
            Some(FunctionField::Visibility) => self.visibility = Some(value),
            Some(FunctionField::Actions) => self.actions = ActionNode::decode_list(&value),
            None => {
                self.extra.insert(key.to_string(), value);
            }
        }
    }

    /// The modifier names this function asks for, in listed order.
    /// Non-string entries are ignored.
    pub fn modifier_names(&self) -> Vec<String> {
        match &self.modifiers {
            Some(JsonValue::Array(names)) => names
                .iter()
                .filter_map(|name| name.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// One tagged step of a function body.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionNode {
    FunctionCall {
        function: Option<String>,
        args: Vec<Argument>,
    },
    VariableDeclaration(JsonMap<String, JsonValue>),
    Assignment(JsonMap<String, JsonValue>),
    IfStatement(JsonMap<String, JsonValue>),
    Loop(JsonMap<String, JsonValue>),
    Return(JsonMap<String, JsonValue>),
    Literal(JsonMap<String, JsonValue>),
    Unrecognized(String),
}

impl ActionNode {
    /// Decodes an `actions` value. Returns `None` unless it is an array;
    /// entries that are not objects with a string `type` are dropped.
    pub fn decode_list(value: &JsonValue) -> Option<Rc<[ActionNode]>> {
        let items = value.as_array()?;
        Some(items.iter().filter_map(ActionNode::decode).collect())
    }

    pub fn decode(value: &JsonValue) -> Option<Self> {
        let fields = value.as_object()?;
        let tag = fields.get("type")?.as_str()?;
        let node = match tag {
            "function_call" => ActionNode::FunctionCall {
                function: fields
                    .get("function")
                    .and_then(JsonValue::as_str)
                    .map(str::to_string),
                args: fields
                    .get("args")
                    .and_then(JsonValue::as_array)
                    .map(|args| args.iter().map(Argument::decode).collect())
                    .unwrap_or_default(),
            },
            "variable_declaration" => ActionNode::VariableDeclaration(fields.clone()),
            "assignment" => ActionNode::Assignment(fields.clone()),
            "if_statement" => ActionNode::IfStatement(fields.clone()),
            "loop" => ActionNode::Loop(fields.clone()),
            "return" => ActionNode::Return(fields.clone()),
            "literal" => ActionNode::Literal(fields.clone()),
            other => ActionNode::Unrecognized(other.to_string()),
        };
        Some(node)
    }

    pub fn tag(&self) -> &str {
        match self {
            ActionNode::FunctionCall { .. } => "function_call",
            ActionNode::VariableDeclaration(_) => "variable_declaration",
            ActionNode::Assignment(_) => "assignment",
            ActionNode::IfStatement(_) => "if_statement",
            ActionNode::Loop(_) => "loop",
            ActionNode::Return(_) => "return",
            ActionNode::Literal(_) => "literal",
            ActionNode::Unrecognized(tag) => tag,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralType {
    String,
    Number,
    Boolean,
}

impl LiteralType {
    /// Accepts `String`, `Number`, `Boolean`, optionally prefixed `imports.`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.strip_prefix("imports.").unwrap_or(tag) {
            "String" => Some(Self::String),
            "Number" => Some(Self::Number),
            "Boolean" => Some(Self::Boolean),
            _ => None,
        }
    }
}

/// An entry in a `function_call` argument list.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Literal { ty: LiteralType, value: JsonValue },
    Passthrough(JsonValue),
}

impl Argument {
    pub fn decode(value: &JsonValue) -> Self {
        let ty = value
            .as_object()
            .and_then(|fields| fields.get("type"))
            .and_then(JsonValue::as_str)
            .and_then(LiteralType::from_tag);
        match ty {
            Some(ty) => Argument::Literal {
                ty,
                value: value.get("value").cloned().unwrap_or(JsonValue::Null),
            },
            None => Argument::Passthrough(value.clone()),
        }
    }

    /// Unwraps a literal descriptor to its scalar. A descriptor whose value
    /// does not match its declared type evaluates to nil.
    pub fn evaluate(&self) -> Value {
        match self {
            Argument::Literal { ty, value } => match (ty, value) {
                (LiteralType::String, JsonValue::String(s)) => Value::string(s.clone()),
                (LiteralType::Number, JsonValue::Number(n)) => {
                    Value::number(n.as_f64().unwrap_or(0.0))
                }
                (LiteralType::Boolean, JsonValue::Bool(b)) => Value::bool(*b),
                _ => Value::nil(),
            },
            Argument::Passthrough(raw) => Value::from_json(raw),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModifierDef {
    pub name: Option<String>,
    pub condition: Option<String>,
    pub actions: Vec<ModifierAction>,
}

impl ModifierDef {
    pub fn from_json(fields: &JsonMap<String, JsonValue>) -> Self {
        let condition = fields
            .get("condition")
            .or_else(|| fields.get("condiction"))
            .and_then(JsonValue::as_str)
            .map(str::to_string);
        Self {
            name: fields
                .get("name")
                .and_then(JsonValue::as_str)
                .map(str::to_string),
            condition,
            actions: fields
                .get("actions")
                .and_then(JsonValue::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(JsonValue::as_object)
                        .map(ModifierAction::from_json)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

/// A mutation instruction inside a modifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ModifierAction {
    pub kind: Option<String>,
    pub target: Option<String>,
    pub value: JsonValue,
}

impl ModifierAction {
    pub fn from_json(fields: &JsonMap<String, JsonValue>) -> Self {
        Self {
            kind: fields
                .get("type")
                .and_then(JsonValue::as_str)
                .map(str::to_string),
            target: fields
                .get("target")
                .and_then(JsonValue::as_str)
                .map(str::to_string),
            value: fields.get("value").cloned().unwrap_or(JsonValue::Null),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_function_call_with_literal_args() {
        let node = ActionNode::decode(&json!({
            "type": "function_call",
            "function": "println",
            "args": [{"type": "imports.String", "value": "hi"}, 7]
        }))
        .unwrap();
        match node {
            ActionNode::FunctionCall { function, args } => {
                assert_eq!(function.as_deref(), Some("println"));
                assert_eq!(args[0].evaluate(), Value::string("hi"));
                assert_eq!(args[1].evaluate(), Value::number(7.0));
            }
            other => panic!("unexpected node {other:?}"),
        }
    }

    #[test]
    fn mistyped_literal_is_nil() {
        let arg = Argument::decode(&json!({"type": "Number", "value": "abc"}));
        assert!(arg.evaluate().is_nil());
    }

    #[test]
    fn untagged_actions_are_dropped() {
        let actions = ActionNode::decode_list(&json!([
            {"type": "literal", "value": 1},
            {"value": 2},
            "loose",
            {"type": "teleport"}
        ]))
        .unwrap();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[1], ActionNode::Unrecognized("teleport".into()));
    }

    #[test]
    fn null_field_counts_as_present() {
        let def = FunctionDef::from_json(json!({"args": null}).as_object().unwrap());
        assert!(def.has_field(FunctionField::Args));
        assert!(!def.has_field(FunctionField::Return));
    }

    #[test]
    fn legacy_condition_key_is_read() {
        let modifier = ModifierDef::from_json(
            json!({"name": "m", "condiction": "function.args == undefined"})
                .as_object()
                .unwrap(),
        );
        assert_eq!(
            modifier.condition.as_deref(),
            Some("function.args == undefined")
        );
    }
}
