//! Bounded, human-readable rendering of runtime [`Value`]s for use in error
//! messages.

use crate::Value;

/// Lists longer than this render their first `MAX_ARRAY_LENGTH` items
/// followed by a `... N more items` marker.
pub const MAX_ARRAY_LENGTH: usize = 10;

/// Non-empty containers nested below this many enclosing containers render
/// as `[Array]`, `[Object]`, or `[TypeName]`.
pub const MAX_RECURSIVE_DEPTH: usize = 2;

/// A value that controls its own rendering.
///
/// The returned [`Value`] is rendered in place of `self`. A returned
/// [`Value::String`] is emitted verbatim rather than quoted.
pub trait Inspect: std::fmt::Debug + Send + Sync {
    fn inspect(&self) -> Value;
}

/// Render `value` for display.
///
/// ```
/// use libgraphql_jit::Value;
/// use libgraphql_jit::inspect::inspect;
///
/// let value = Value::object([
///     ("name", Value::from("Ada")),
///     ("tags", Value::list([Value::from(1_i64), Value::from(f64::NAN)])),
/// ]);
/// assert_eq!(inspect(&value), r#"{ name: "Ada", tags: [1, NaN] }"#);
/// ```
pub fn inspect(value: &Value) -> String {
    let mut seen = vec![];
    format_value(value, &mut seen)
}

/// Identity of the shared containers on the current descent.
type SeenValues = Vec<*const ()>;

fn format_value(value: &Value, seen: &mut SeenValues) -> String {
    match value {
        Value::Bool(b) => b.to_string(),
        Value::Enum(name) => name.to_string(),
        Value::Float(f) => format_float(*f),
        Value::Int(i) => i.to_string(),
        Value::Null => "null".to_string(),
        Value::String(s) => quote_string(s),

        Value::Custom(custom) => {
            let identity = std::sync::Arc::as_ptr(custom) as *const ();
            with_seen(identity, seen, |seen| match custom.inspect() {
                Value::String(s) => s,
                other => format_value(&other, seen),
            })
        },

        Value::List(items) => {
            let identity = std::sync::Arc::as_ptr(items) as *const ();
            with_seen(identity, seen, |seen| format_list(items, seen))
        },

        Value::Object(object) => {
            let identity = std::sync::Arc::as_ptr(object) as *const ();
            with_seen(identity, seen, |seen| {
                if object.fields().is_empty() {
                    return "{}".to_string();
                }
                if seen.len() > MAX_RECURSIVE_DEPTH {
                    return format!("[{}]", object.type_name().unwrap_or("Object"));
                }
                let fields = object
                    .fields()
                    .iter()
                    .map(|(key, value)| format!("{key}: {}", format_value(value, seen)))
                    .collect::<Vec<_>>();
                format!("{{ {} }}", fields.join(", "))
            })
        },
    }
}

fn with_seen(
    identity: *const (),
    seen: &mut SeenValues,
    render: impl FnOnce(&mut SeenValues) -> String,
) -> String {
    if seen.contains(&identity) {
        return "[Circular]".to_string();
    }
    seen.push(identity);
    let rendered = render(seen);
    seen.pop();
    rendered
}

fn format_list(items: &[Value], seen: &mut SeenValues) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }
    if seen.len() > MAX_RECURSIVE_DEPTH {
        return "[Array]".to_string();
    }

    let shown = items.len().min(MAX_ARRAY_LENGTH);
    let mut rendered = items[..shown]
        .iter()
        .map(|item| format_value(item, seen))
        .collect::<Vec<_>>();

    match items.len() - shown {
        0 => (),
        1 => rendered.push("... 1 more item".to_string()),
        remaining => rendered.push(format!("... {remaining} more items")),
    }
    format!("[{}]", rendered.join(", "))
}

fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f == f64::INFINITY {
        "Infinity".to_string()
    } else if f == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if f == 0.0 {
        // Both signs of zero
        "0".to_string()
    } else {
        f.to_string()
    }
}

fn quote_string(s: &str) -> String {
    // Serializing a `&str` cannot fail.
    serde_json::to_string(s).unwrap_or_else(|_| format!("{s:?}"))
}
