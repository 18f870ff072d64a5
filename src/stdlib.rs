//! Native operations exposed to interpreted code.
//!
//! Every operation receives the raw argument list. Too few arguments yield a
//! zero value of the operation's result type rather than an error; a wrong
//! argument shape or an impossible computation yields a [`Diagnostic`],
//! which the backend hands back to the program as an error value.

use std::{
    cmp::Ordering,
    fs,
    io::{BufRead, Write},
    thread,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use rand::Rng;

use crate::{
    backend::Backend,
    diagnostics::{Diagnostic, DiagnosticKind},
    value::{Value, ValueKind},
};

pub type OpResult = std::result::Result<Value, Diagnostic>;

pub type NativeCallback = fn(&Backend, &[Value]) -> OpResult;

#[derive(Clone, Copy)]
pub struct NativeFunction {
    pub name: &'static str,
    pub callback: NativeCallback,
}

impl NativeFunction {
    pub fn call(&self, backend: &Backend, args: &[Value]) -> OpResult {
        (self.callback)(backend, args)
    }
}

impl std::fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<native fn {}>", self.name)
    }
}

const fn native(name: &'static str, callback: NativeCallback) -> NativeFunction {
    NativeFunction { name, callback }
}

const PRINTLN: NativeFunction = native("println", io_println);
const PRINT: NativeFunction = native("print", io_print);
const PRINTF: NativeFunction = native("printf", io_printf);
const INPUT: NativeFunction = native("input", io_input);
const READ_FILE: NativeFunction = native("read_file", io_read_file);
const WRITE_FILE: NativeFunction = native("write_file", io_write_file);
const ADD: NativeFunction = native("add", math_add);
const SUBTRACT: NativeFunction = native("subtract", math_subtract);
const MULTIPLY: NativeFunction = native("multiply", math_multiply);
const DIVIDE: NativeFunction = native("divide", math_divide);
const POWER: NativeFunction = native("power", math_power);
const SQRT: NativeFunction = native("sqrt", math_sqrt);
const ABS: NativeFunction = native("abs", math_abs);
const FLOOR: NativeFunction = native("floor", math_floor);
const CEIL: NativeFunction = native("ceil", math_ceil);
const ROUND: NativeFunction = native("round", math_round);
const CONCAT: NativeFunction = native("concat", string_concat);
const LENGTH: NativeFunction = native("length", string_length);
const SUBSTRING: NativeFunction = native("substring", string_substring);
const TO_UPPER: NativeFunction = native("to_upper", string_to_upper);
const TO_LOWER: NativeFunction = native("to_lower", string_to_lower);
const TRIM: NativeFunction = native("trim", string_trim);
const SPLIT: NativeFunction = native("split", string_split);
const JOIN: NativeFunction = native("join", string_join);
const ARRAY_CREATE: NativeFunction = native("array_create", array_create);
const ARRAY_PUSH: NativeFunction = native("array_push", array_push);
const ARRAY_POP: NativeFunction = native("array_pop", array_pop);
const ARRAY_GET: NativeFunction = native("array_get", array_get);
const ARRAY_SET: NativeFunction = native("array_set", array_set);
const ARRAY_LENGTH: NativeFunction = native("array_length", array_length);
const ARRAY_SORT: NativeFunction = native("array_sort", array_sort);
const ARRAY_REVERSE: NativeFunction = native("array_reverse", array_reverse);
const SLEEP: NativeFunction = native("sleep", system_sleep);
const RANDOM: NativeFunction = native("random", system_random);
const RANDOM_INT: NativeFunction = native("random_int", system_random_int);
const TIME_NOW: NativeFunction = native("time_now", system_time_now);
const EXIT: NativeFunction = native("exit", system_exit);
const TO_STRING: NativeFunction = native("to_string", convert_to_string);
const TO_NUMBER: NativeFunction = native("to_number", convert_to_number);
const TO_BOOLEAN: NativeFunction = native("to_boolean", convert_to_boolean);
const IS_EMPTY: NativeFunction = native("is_empty", check_is_empty);
const IS_NUMBER: NativeFunction = native("is_number", check_is_number);
const IS_STRING: NativeFunction = native("is_string", check_is_string);
const IS_ARRAY: NativeFunction = native("is_array", check_is_array);
const IS_BOOLEAN: NativeFunction = native("is_boolean", check_is_boolean);

/// Abstract names registered when no descriptor is available.
pub const DEFAULT_OPERATIONS: &[(&str, NativeFunction)] = &[
    ("println", PRINTLN),
    ("print", PRINT),
    ("printf", PRINTF),
    ("input", INPUT),
    ("read_file", READ_FILE),
    ("write_file", WRITE_FILE),
    ("add", ADD),
    ("subtract", SUBTRACT),
    ("multiply", MULTIPLY),
    ("divide", DIVIDE),
    ("power", POWER),
    ("sqrt", SQRT),
    ("abs", ABS),
    ("floor", FLOOR),
    ("ceil", CEIL),
    ("round", ROUND),
    ("concat", CONCAT),
    ("length", LENGTH),
    ("substring", SUBSTRING),
    ("to_upper", TO_UPPER),
    ("to_lower", TO_LOWER),
    ("trim", TRIM),
    ("split", SPLIT),
    ("join", JOIN),
    ("array_create", ARRAY_CREATE),
    ("array_push", ARRAY_PUSH),
    ("array_pop", ARRAY_POP),
    ("array_get", ARRAY_GET),
    ("array_set", ARRAY_SET),
    ("array_length", ARRAY_LENGTH),
    ("array_sort", ARRAY_SORT),
    ("array_reverse", ARRAY_REVERSE),
    ("sleep", SLEEP),
    ("random", RANDOM),
    ("random_int", RANDOM_INT),
    ("time_now", TIME_NOW),
    ("exit", EXIT),
    ("to_string", TO_STRING),
    ("to_number", TO_NUMBER),
    ("to_boolean", TO_BOOLEAN),
    ("is_empty", IS_EMPTY),
    ("is_number", IS_NUMBER),
    ("is_string", IS_STRING),
    ("is_array", IS_ARRAY),
    ("is_boolean", IS_BOOLEAN),
];

/// Resolves an `implementation` id from a backend descriptor. Both the
/// qualified ids of the reference descriptor (`fmt.Println`) and the plain
/// ids (`print`) are accepted. The plain id `print` names the
/// newline-terminated printer; `print_no_newline` names the bare one.
pub fn by_implementation(id: &str) -> Option<NativeFunction> {
    let function = match id {
        "fmt.Println" | "print" | "println" => PRINTLN,
        "fmt.Print" | "print_no_newline" => PRINT,
        "fmt.Printf" | "printf" => PRINTF,
        "bufio.NewReader" | "input" => INPUT,
        "ioutil.ReadFile" | "read_file" => READ_FILE,
        "ioutil.WriteFile" | "write_file" => WRITE_FILE,
        "math.Add" | "add" => ADD,
        "math.Subtract" | "subtract" => SUBTRACT,
        "math.Multiply" | "multiply" => MULTIPLY,
        "math.Divide" | "divide" => DIVIDE,
        "math.Pow" | "power" => POWER,
        "math.Sqrt" | "sqrt" => SQRT,
        "math.Abs" | "abs" => ABS,
        "math.Floor" | "floor" => FLOOR,
        "math.Ceil" | "ceil" => CEIL,
        "math.Round" | "round" => ROUND,
        "strings.Concat" | "concat" => CONCAT,
        "len" | "length" => LENGTH,
        "strings.Substring" | "substring" => SUBSTRING,
        "strings.ToUpper" | "to_upper" => TO_UPPER,
        "strings.ToLower" | "to_lower" => TO_LOWER,
        "strings.TrimSpace" | "trim" => TRIM,
        "strings.Split" | "split" => SPLIT,
        "strings.Join" | "join" => JOIN,
        "make" | "array_create" => ARRAY_CREATE,
        "append" | "array_push" => ARRAY_PUSH,
        "slice.Pop" | "array_pop" => ARRAY_POP,
        "slice.Get" | "array_get" => ARRAY_GET,
        "slice.Set" | "array_set" => ARRAY_SET,
        "array_length" => ARRAY_LENGTH,
        "sort.Sort" | "array_sort" => ARRAY_SORT,
        "slice.Reverse" | "array_reverse" => ARRAY_REVERSE,
        "time.Sleep" | "sleep" => SLEEP,
        "rand.Float64" | "random" => RANDOM,
        "rand.Intn" | "random_int" => RANDOM_INT,
        "time.Now" | "time_now" => TIME_NOW,
        "os.Exit" | "exit" => EXIT,
        "fmt.Sprintf" | "to_string" => TO_STRING,
        "strconv.ParseFloat" | "to_number" => TO_NUMBER,
        "strconv.ParseBool" | "to_boolean" => TO_BOOLEAN,
        "utils.IsEmpty" | "is_empty" => IS_EMPTY,
        "utils.IsNumber" | "is_number" => IS_NUMBER,
        "utils.IsString" | "is_string" => IS_STRING,
        "utils.IsArray" | "is_array" => IS_ARRAY,
        "utils.IsBoolean" | "is_boolean" => IS_BOOLEAN,
        _ => return None,
    };
    Some(function)
}

fn expect_list<'a>(value: &'a Value, name: &str) -> Result<&'a [Value], Diagnostic> {
    value.as_list().ok_or_else(|| {
        Diagnostic::new(
            DiagnosticKind::InvalidArgument,
            format!("`{name}` expected List but found {}", value.type_name()),
        )
    })
}

fn expect_index(list: &[Value], index: &Value, name: &str) -> Result<usize, Diagnostic> {
    let raw = index.to_number().trunc();
    if !raw.is_finite() || raw < 0.0 || raw >= list.len() as f64 {
        return Err(Diagnostic::new(
            DiagnosticKind::IndexOutOfRange,
            format!("`{name}` index {raw} out of bounds for length {}", list.len()),
        ));
    }
    Ok(raw as usize)
}

fn io_error(name: &str, err: std::io::Error) -> Diagnostic {
    let mut diagnostic = Diagnostic::new(DiagnosticKind::Io, format!("`{name}` failed: {err}"));
    if let Some(code) = err.raw_os_error() {
        diagnostic = diagnostic.with_note(format!("os error code: {code}"));
    }
    diagnostic
}

fn joined(args: &[Value]) -> String {
    args.iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn io_println(backend: &Backend, args: &[Value]) -> OpResult {
    writeln!(backend.output(), "{}", joined(args)).map_err(|err| io_error("println", err))?;
    Ok(Value::nil())
}

fn io_print(backend: &Backend, args: &[Value]) -> OpResult {
    let mut out = backend.output();
    write!(out, "{}", joined(args)).map_err(|err| io_error("print", err))?;
    out.flush().map_err(|err| io_error("print", err))?;
    Ok(Value::nil())
}

fn io_printf(backend: &Backend, args: &[Value]) -> OpResult {
    let [format, rest @ ..] = args else {
        return Ok(Value::nil());
    };
    let text = format_printf(&format.to_string(), rest);
    let mut out = backend.output();
    write!(out, "{text}").map_err(|err| io_error("printf", err))?;
    out.flush().map_err(|err| io_error("printf", err))?;
    Ok(Value::nil())
}

/// Expands `%s %v %d %f %.Nf %t %%` against `args`. A verb with no argument
/// left renders as `%!<verb>(MISSING)`.
pub fn format_printf(format: &str, args: &[Value]) -> String {
    let mut output = String::new();
    let mut args = args.iter();
    let mut chars = format.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '%' {
            output.push(ch);
            continue;
        }
        let mut precision = None;
        if chars.peek() == Some(&'.') {
            chars.next();
            let mut digits = String::new();
            while let Some(digit) = chars.peek().filter(|c| c.is_ascii_digit()) {
                digits.push(*digit);
                chars.next();
            }
            precision = Some(digits.parse::<usize>().unwrap_or(0));
        }
        let Some(verb) = chars.next() else {
            output.push('%');
            break;
        };
        if verb == '%' {
            output.push('%');
            continue;
        }
        let Some(arg) = args.next() else {
            output.push_str(&format!("%!{verb}(MISSING)"));
            continue;
        };
        match verb {
            's' | 'v' => output.push_str(&arg.to_string()),
            'd' => output.push_str(&format!("{}", arg.to_number().trunc() as i64)),
            'f' => output.push_str(&format!(
                "{:.*}",
                precision.unwrap_or(6),
                arg.to_number()
            )),
            't' => output.push_str(&arg.to_boolean().to_string()),
            other => output.push_str(&format!("%!{other}({arg})")),
        }
    }
    output
}

fn io_input(backend: &Backend, args: &[Value]) -> OpResult {
    if let Some(prompt) = args.first() {
        let mut out = backend.output();
        write!(out, "{prompt}").map_err(|err| io_error("input", err))?;
        out.flush().map_err(|err| io_error("input", err))?;
    }
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|err| io_error("input", err))?;
    Ok(Value::string(line.trim()))
}

fn io_read_file(_: &Backend, args: &[Value]) -> OpResult {
    let Some(path) = args.first() else {
        return Ok(Value::string(""));
    };
    let path = path.to_string();
    fs::read_to_string(&path)
        .map(Value::string)
        .map_err(|err| io_error("read_file", err).with_note(format!("path: {path}")))
}

fn io_write_file(_: &Backend, args: &[Value]) -> OpResult {
    let [path, contents, ..] = args else {
        return Ok(Value::bool(false));
    };
    Ok(Value::bool(
        fs::write(path.to_string(), contents.to_string()).is_ok(),
    ))
}

fn binary_numeric(args: &[Value], op: fn(f64, f64) -> f64) -> OpResult {
    let [a, b, ..] = args else {
        return Ok(Value::number(0.0));
    };
    Ok(Value::number(op(a.to_number(), b.to_number())))
}

fn unary_numeric(args: &[Value], op: fn(f64) -> f64) -> OpResult {
    let Some(x) = args.first() else {
        return Ok(Value::number(0.0));
    };
    Ok(Value::number(op(x.to_number())))
}

fn math_add(_: &Backend, args: &[Value]) -> OpResult {
    binary_numeric(args, |a, b| a + b)
}

fn math_subtract(_: &Backend, args: &[Value]) -> OpResult {
    binary_numeric(args, |a, b| a - b)
}

fn math_multiply(_: &Backend, args: &[Value]) -> OpResult {
    binary_numeric(args, |a, b| a * b)
}

fn math_divide(_: &Backend, args: &[Value]) -> OpResult {
    let [a, b, ..] = args else {
        return Ok(Value::number(0.0));
    };
    let divisor = b.to_number();
    if divisor == 0.0 {
        return Err(Diagnostic::new(
            DiagnosticKind::Arithmetic,
            "division by zero",
        ));
    }
    Ok(Value::number(a.to_number() / divisor))
}

fn math_power(_: &Backend, args: &[Value]) -> OpResult {
    binary_numeric(args, f64::powf)
}

fn math_sqrt(_: &Backend, args: &[Value]) -> OpResult {
    let Some(x) = args.first() else {
        return Ok(Value::number(0.0));
    };
    let number = x.to_number();
    if number < 0.0 {
        return Err(Diagnostic::new(
            DiagnosticKind::Arithmetic,
            "sqrt expects non-negative input",
        ));
    }
    Ok(Value::number(number.sqrt()))
}

fn math_abs(_: &Backend, args: &[Value]) -> OpResult {
    unary_numeric(args, f64::abs)
}

fn math_floor(_: &Backend, args: &[Value]) -> OpResult {
    unary_numeric(args, f64::floor)
}

fn math_ceil(_: &Backend, args: &[Value]) -> OpResult {
    unary_numeric(args, f64::ceil)
}

fn math_round(_: &Backend, args: &[Value]) -> OpResult {
    unary_numeric(args, f64::round)
}

fn string_concat(_: &Backend, args: &[Value]) -> OpResult {
    Ok(Value::string(
        args.iter().map(Value::to_string).collect::<String>(),
    ))
}

/// Character count of a string (or of any value's string form); element
/// count of a list.
fn string_length(_: &Backend, args: &[Value]) -> OpResult {
    let Some(value) = args.first() else {
        return Ok(Value::number(0.0));
    };
    let len = match value.kind() {
        ValueKind::List(values) => values.len(),
        _ => value.to_string().chars().count(),
    };
    Ok(Value::number(len as f64))
}

fn string_substring(_: &Backend, args: &[Value]) -> OpResult {
    let [text, start, rest @ ..] = args else {
        return Ok(Value::string(""));
    };
    let chars: Vec<char> = text.to_string().chars().collect();
    let start = start.to_number().trunc().max(0.0) as usize;
    if start >= chars.len() {
        return Ok(Value::string(""));
    }
    let end = match rest.first() {
        Some(end) => (end.to_number().trunc().max(0.0) as usize).min(chars.len()),
        None => chars.len(),
    };
    if end <= start {
        return Ok(Value::string(""));
    }
    Ok(Value::string(chars[start..end].iter().collect::<String>()))
}

fn string_map(args: &[Value], op: fn(&str) -> String) -> OpResult {
    let Some(text) = args.first() else {
        return Ok(Value::string(""));
    };
    Ok(Value::string(op(&text.to_string())))
}

fn string_to_upper(_: &Backend, args: &[Value]) -> OpResult {
    string_map(args, str::to_uppercase)
}

fn string_to_lower(_: &Backend, args: &[Value]) -> OpResult {
    string_map(args, str::to_lowercase)
}

fn string_trim(_: &Backend, args: &[Value]) -> OpResult {
    string_map(args, |text| text.trim().to_string())
}

fn string_split(_: &Backend, args: &[Value]) -> OpResult {
    let Some(text) = args.first() else {
        return Ok(Value::list(Vec::new()));
    };
    let text = text.to_string();
    let separator = args
        .get(1)
        .map(Value::to_string)
        .unwrap_or_else(|| " ".to_string());
    let parts = if separator.is_empty() {
        text.chars().map(|ch| Value::string(ch.to_string())).collect()
    } else {
        text.split(separator.as_str()).map(Value::string).collect()
    };
    Ok(Value::list(parts))
}

fn string_join(_: &Backend, args: &[Value]) -> OpResult {
    let [items, separator, ..] = args else {
        return Ok(Value::string(""));
    };
    let items = expect_list(items, "join")?;
    Ok(Value::string(
        items
            .iter()
            .map(Value::to_string)
            .collect::<Vec<_>>()
            .join(&separator.to_string()),
    ))
}

fn array_create(_: &Backend, args: &[Value]) -> OpResult {
    Ok(Value::list(args.to_vec()))
}

fn array_push(_: &Backend, args: &[Value]) -> OpResult {
    let [list, item, ..] = args else {
        return Ok(Value::list(Vec::new()));
    };
    let mut new = expect_list(list, "array_push")?.to_vec();
    new.push(item.clone());
    Ok(Value::list(new))
}

/// Returns the last element; the list argument itself is not modified.
fn array_pop(_: &Backend, args: &[Value]) -> OpResult {
    let Some(list) = args.first() else {
        return Ok(Value::nil());
    };
    expect_list(list, "array_pop")?
        .last()
        .cloned()
        .ok_or_else(|| {
            Diagnostic::new(
                DiagnosticKind::IndexOutOfRange,
                "`array_pop` expects non-empty list",
            )
        })
}

fn array_get(_: &Backend, args: &[Value]) -> OpResult {
    let [list, index, ..] = args else {
        return Ok(Value::nil());
    };
    let list = expect_list(list, "array_get")?;
    let idx = expect_index(list, index, "array_get")?;
    Ok(list[idx].clone())
}

fn array_set(_: &Backend, args: &[Value]) -> OpResult {
    let [list, index, value, ..] = args else {
        return Ok(Value::nil());
    };
    let list = expect_list(list, "array_set")?;
    let idx = expect_index(list, index, "array_set")?;
    let mut new = list.to_vec();
    new[idx] = value.clone();
    Ok(Value::list(new))
}

fn array_length(_: &Backend, args: &[Value]) -> OpResult {
    let Some(list) = args.first() else {
        return Ok(Value::number(0.0));
    };
    Ok(Value::number(expect_list(list, "array_length")?.len() as f64))
}

/// Numbers first in numeric order, then everything else by string form.
fn sort_order(a: &Value, b: &Value) -> Ordering {
    match (a.kind(), b.kind()) {
        (ValueKind::Number(x), ValueKind::Number(y)) => x.total_cmp(y),
        (ValueKind::Number(_), _) => Ordering::Less,
        (_, ValueKind::Number(_)) => Ordering::Greater,
        _ => a.to_string().cmp(&b.to_string()),
    }
}

fn array_sort(_: &Backend, args: &[Value]) -> OpResult {
    let Some(list) = args.first() else {
        return Ok(Value::list(Vec::new()));
    };
    let mut sorted = expect_list(list, "array_sort")?.to_vec();
    sorted.sort_by(sort_order);
    Ok(Value::list(sorted))
}

fn array_reverse(_: &Backend, args: &[Value]) -> OpResult {
    let Some(list) = args.first() else {
        return Ok(Value::list(Vec::new()));
    };
    let mut reversed = expect_list(list, "array_reverse")?.to_vec();
    reversed.reverse();
    Ok(Value::list(reversed))
}

fn system_sleep(_: &Backend, args: &[Value]) -> OpResult {
    if let Some(seconds) = args.first() {
        if let Ok(duration) = Duration::try_from_secs_f64(seconds.to_number()) {
            thread::sleep(duration);
        }
    }
    Ok(Value::nil())
}

fn system_random(backend: &Backend, _: &[Value]) -> OpResult {
    Ok(Value::number(backend.rng().random::<f64>()))
}

fn system_random_int(backend: &Backend, args: &[Value]) -> OpResult {
    let [min, max, ..] = args else {
        return Ok(Value::number(0.0));
    };
    let (min, max) = (min.to_number().trunc() as i64, max.to_number().trunc() as i64);
    if max < min {
        return Err(Diagnostic::new(
            DiagnosticKind::InvalidArgument,
            format!("`random_int` range is empty: {min}..={max}"),
        ));
    }
    Ok(Value::number(backend.rng().random_range(min..=max) as f64))
}

/// Whole seconds since the Unix epoch.
fn system_time_now(_: &Backend, _: &[Value]) -> OpResult {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(duration) => Ok(Value::number(duration.as_secs() as f64)),
        Err(_) => Err(Diagnostic::new(
            DiagnosticKind::Io,
            "system clock went backwards",
        )),
    }
}

/// Terminates the whole process. This is not a recoverable control-flow exit.
fn system_exit(backend: &Backend, args: &[Value]) -> OpResult {
    let code = args
        .first()
        .map(|code| code.to_number().trunc() as i32)
        .unwrap_or(0);
    backend.output().flush().ok();
    std::process::exit(code);
}

fn convert_to_string(_: &Backend, args: &[Value]) -> OpResult {
    Ok(Value::string(
        args.first().map(Value::to_string).unwrap_or_default(),
    ))
}

fn convert_to_number(_: &Backend, args: &[Value]) -> OpResult {
    Ok(Value::number(
        args.first().map(Value::to_number).unwrap_or(0.0),
    ))
}

fn convert_to_boolean(_: &Backend, args: &[Value]) -> OpResult {
    Ok(Value::bool(
        args.first().is_some_and(Value::to_boolean),
    ))
}

fn check_is_empty(_: &Backend, args: &[Value]) -> OpResult {
    let Some(value) = args.first() else {
        return Ok(Value::bool(true));
    };
    let empty = match value.kind() {
        ValueKind::String(s) => s.trim().is_empty(),
        ValueKind::List(values) => values.is_empty(),
        _ => value.is_nil(),
    };
    Ok(Value::bool(empty))
}

fn check_is_number(_: &Backend, args: &[Value]) -> OpResult {
    Ok(Value::bool(
        args.first()
            .is_some_and(|value| value.to_string().parse::<f64>().is_ok()),
    ))
}

fn check_is_string(_: &Backend, args: &[Value]) -> OpResult {
    Ok(Value::bool(
        args.first()
            .is_some_and(|value| matches!(value.kind(), ValueKind::String(_))),
    ))
}

fn check_is_array(_: &Backend, args: &[Value]) -> OpResult {
    Ok(Value::bool(
        args.first()
            .is_some_and(|value| matches!(value.kind(), ValueKind::List(_))),
    ))
}

fn check_is_boolean(_: &Backend, args: &[Value]) -> OpResult {
    Ok(Value::bool(
        args.first()
            .is_some_and(|value| matches!(value.kind(), ValueKind::Bool(_))),
    ))
}
