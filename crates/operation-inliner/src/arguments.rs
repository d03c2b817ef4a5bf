use graphql_parser::query::Value;
use std::fmt::Write as _;

/// Renders an argument list into an order-independent, value-equal key.
///
/// The pairs are sorted by argument name before rendering, so two lists
/// differing only in argument order produce the same key. Object fields
/// come out sorted too (the AST stores objects as a `BTreeMap`), while
/// list element order stays significant. A variable renders as `$name`,
/// which no literal rendering can collide with. No arguments produce an
/// empty key.
pub(crate) fn canonical_key<'a>(arguments: &[(&'a str, Value<'a, &'a str>)]) -> String {
    if arguments.is_empty() {
        return String::new();
    }

    let mut pairs: Vec<_> = arguments.iter().collect();
    pairs.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut rendered = String::new();
    rendered.push('(');

    for (i, (name, value)) in pairs.into_iter().enumerate() {
        if i > 0 {
            rendered.push(',');
        }

        rendered.push_str(name);
        rendered.push(':');
        write_value(value, &mut rendered);
    }

    rendered.push(')');
    rendered
}

fn write_value<'a>(value: &Value<'a, &'a str>, rendered: &mut String) {
    match value {
        Value::Variable(name) => {
            rendered.push('$');
            rendered.push_str(name);
        }
        Value::Int(value) => {
            let _ = write!(rendered, "{}", value.as_i64().unwrap_or_default());
        }
        Value::Float(value) => {
            let _ = write!(rendered, "{value}");
        }
        Value::String(value) => {
            let _ = write!(rendered, "{value:?}");
        }
        Value::Boolean(value) => {
            rendered.push_str(if *value { "true" } else { "false" });
        }
        Value::Null => {
            rendered.push_str("null");
        }
        Value::Enum(name) => {
            rendered.push_str(name);
        }
        Value::List(list) => {
            rendered.push('[');

            for (i, element) in list.iter().enumerate() {
                if i > 0 {
                    rendered.push(',');
                }

                write_value(element, rendered);
            }

            rendered.push(']');
        }
        Value::Object(map) => {
            rendered.push('{');

            for (i, (name, value)) in map.iter().enumerate() {
                if i > 0 {
                    rendered.push(',');
                }

                rendered.push_str(name);
                rendered.push(':');
                write_value(value, rendered);
            }

            rendered.push('}');
        }
    }
}
