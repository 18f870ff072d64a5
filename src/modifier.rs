//! Declarative rewriting of function definitions before a program runs.

use indexmap::IndexSet;
use tracing::{debug, warn};

use crate::{
    ast::{FunctionDef, FunctionField, ModifierDef},
    program::Program,
};

/// Parsed form of a modifier's `condition` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// `function.<field> == undefined`
    FieldUndefined(FunctionField),
    /// Anything else, including a missing condition.
    Always,
}

impl Condition {
    pub fn parse(condition: Option<&str>) -> Self {
        let Some(text) = condition else {
            return Condition::Always;
        };
        let parts: Vec<&str> = text.split("==").collect();
        let [lhs, rhs] = parts.as_slice() else {
            return Condition::Always;
        };
        if rhs.trim() != "undefined" {
            return Condition::Always;
        }
        let field = match lhs.trim() {
            "function.args" => FunctionField::Args,
            "function.return" => FunctionField::Return,
            "function.modifiers" => FunctionField::Modifiers,
            "function.visibility" => FunctionField::Visibility,
            _ => return Condition::Always,
        };
        Condition::FieldUndefined(field)
    }

    pub fn holds(self, function: &FunctionDef) -> bool {
        match self {
            Condition::FieldUndefined(field) => !function.has_field(field),
            Condition::Always => true,
        }
    }
}

/// Applies every modifier each function lists, in the function's order.
/// Runs once on the program being executed; modules loaded later are not
/// rewritten.
pub fn apply_modifiers(program: &mut Program) {
    for (name, function) in program.functions.iter_mut() {
        let requested: IndexSet<String> = function.modifier_names().into_iter().collect();
        for modifier_name in &requested {
            match program
                .modifiers
                .iter()
                .find(|modifier| modifier.name.as_deref() == Some(modifier_name.as_str()))
            {
                Some(modifier) => apply_modifier(name, function, modifier),
                None => warn!(function = %name, modifier = %modifier_name, "modifier not found"),
            }
        }
    }
}

fn apply_modifier(name: &str, function: &mut FunctionDef, modifier: &ModifierDef) {
    let condition = Condition::parse(modifier.condition.as_deref());
    if !condition.holds(function) {
        debug!(function = name, ?condition, "modifier condition not met");
        return;
    }
    for action in &modifier.actions {
        if action.kind.as_deref() != Some("assignment") {
            continue;
        }
        let Some(field) = action
            .target
            .as_deref()
            .and_then(|target| target.strip_prefix("function."))
            .and_then(|rest| rest.split('.').next())
        else {
            continue;
        };
        debug!(function = name, field, "modifier assigns field");
        function.set_field(field, action.value.clone());
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use serde_json::{json, Value as JsonValue};

    use super::*;
    use crate::loader::FsModuleSource;

    fn program(document: JsonValue) -> Program {
        Program::from_json(&document, Rc::new(FsModuleSource::current_dir()))
    }

    fn default_args_modifier() -> JsonValue {
        json!({
            "name": "default_args",
            "condition": "function.args == undefined",
            "actions": [{"type": "assignment", "target": "function.args", "value": []}]
        })
    }

    #[test]
    fn parses_recognized_conditions() {
        assert_eq!(
            Condition::parse(Some("function.return == undefined")),
            Condition::FieldUndefined(FunctionField::Return)
        );
        assert_eq!(
            Condition::parse(Some("  function.visibility==undefined ")),
            Condition::FieldUndefined(FunctionField::Visibility)
        );
        assert_eq!(
            Condition::parse(Some("function.name == undefined")),
            Condition::Always
        );
        assert_eq!(Condition::parse(Some("whatever")), Condition::Always);
        assert_eq!(Condition::parse(None), Condition::Always);
    }

    #[test]
    fn no_modifiers_leaves_functions_unchanged() {
        let document = json!({
            "functions": {
                "main": {"modifiers": ["missing"], "actions": []},
                "helper": {"args": ["x"]}
            }
        });
        let mut prog = program(document.clone());
        let before = prog.functions.clone();
        apply_modifiers(&mut prog);
        assert_eq!(prog.functions, before);
    }

    #[test]
    fn sets_absent_args_only() {
        let mut prog = program(json!({
            "functions": {
                "bare": {"modifiers": ["default_args"]},
                "typed": {"modifiers": ["default_args"], "args": ["x"]}
            },
            "modifiers": [default_args_modifier()]
        }));
        apply_modifiers(&mut prog);
        assert_eq!(prog.functions["bare"].args, Some(json!([])));
        assert_eq!(prog.functions["typed"].args, Some(json!(["x"])));
    }

    #[test]
    fn follows_function_listing_order() {
        let mut prog = program(json!({
            "functions": {
                "main": {"modifiers": ["second", "first"]}
            },
            "modifiers": [
                {"name": "first", "actions": [
                    {"type": "assignment", "target": "function.visibility", "value": "first"}
                ]},
                {"name": "second", "actions": [
                    {"type": "assignment", "target": "function.visibility", "value": "second"}
                ]}
            ]
        }));
        apply_modifiers(&mut prog);
        assert_eq!(prog.functions["main"].visibility, Some(json!("first")));
    }

    #[test]
    fn repeated_name_applies_once() {
        let mut prog = program(json!({
            "functions": {
                "main": {"modifiers": ["a", "b", "a"]}
            },
            "modifiers": [
                {"name": "a", "actions": [
                    {"type": "assignment", "target": "function.visibility", "value": "a"}
                ]},
                {"name": "b", "actions": [
                    {"type": "assignment", "target": "function.visibility", "value": "b"}
                ]}
            ]
        }));
        apply_modifiers(&mut prog);
        assert_eq!(prog.functions["main"].visibility, Some(json!("b")));
    }

    #[test]
    fn missing_value_assigns_null() {
        let mut prog = program(json!({
            "functions": {"main": {"modifiers": ["ret"]}},
            "modifiers": [
                {"name": "ret", "condition": "function.return == undefined", "actions": [
                    {"type": "assignment", "target": "function.return"}
                ]}
            ]
        }));
        apply_modifiers(&mut prog);
        assert_eq!(prog.functions["main"].return_type, Some(JsonValue::Null));
    }

    #[test]
    fn ignores_other_action_types_and_targets() {
        let mut prog = program(json!({
            "functions": {"main": {"modifiers": ["noop"]}},
            "modifiers": [
                {"name": "noop", "actions": [
                    {"type": "append", "target": "function.args", "value": [1]},
                    {"type": "assignment", "target": "module.args", "value": [2]},
                    {"type": "assignment", "target": "function.description", "value": "doc"}
                ]}
            ]
        }));
        apply_modifiers(&mut prog);
        let main = &prog.functions["main"];
        assert_eq!(main.args, None);
        assert_eq!(main.extra.get("description"), Some(&json!("doc")));
    }

    #[test]
    fn assigning_actions_redecodes_body() {
        let mut prog = program(json!({
            "functions": {"main": {"modifiers": ["body"]}},
            "modifiers": [
                {"name": "body", "actions": [
                    {"type": "assignment", "target": "function.actions", "value": [
                        {"type": "function_call", "function": "println", "args": []}
                    ]}
                ]}
            ]
        }));
        apply_modifiers(&mut prog);
        let actions = prog.functions["main"].actions.as_ref().unwrap();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].tag(), "function_call");
    }
}
