use serde_json::Value;

/// Fills printf-style placeholders in `template` from `args`.
///
/// Supports `%s`, `%d`, `%f`, `%i`, `%o`, `%O`, `%j` and `%%`. A placeholder
/// with no argument left is kept as written. Returns the message and how many
/// arguments it consumed.
pub fn format_message(template: &str, args: &[Value]) -> (String, usize) {
    let mut out = String::with_capacity(template.len());
    let mut used = 0;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let Some(&spec) = chars.peek() else {
            out.push('%');
            break;
        };
        if spec == '%' {
            out.push('%');
            chars.next();
            continue;
        }
        let Some(arg) = args.get(used) else {
            out.push('%');
            continue;
        };
        let rendered = match spec {
            's' => text(arg),
            'd' | 'f' => number(to_f64(arg)),
            'i' => number(to_f64(arg).floor()),
            'o' | 'O' | 'j' => arg.to_string(),
            _ => {
                out.push('%');
                continue;
            }
        };
        out.push_str(&rendered);
        used += 1;
        chars.next();
    }

    (out, used)
}

fn text(arg: &Value) -> String {
    match arg {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn to_f64(arg: &Value) -> f64 {
    match arg {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null => 0.0,
        _ => f64::NAN,
    }
}

/// Number text as a browser prints it: no trailing `.0`, `NaN`, `Infinity`.
fn number(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        v.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_placeholder() {
        let (msg, used) = format_message("user %s logged in", &[json!("alice")]);
        assert_eq!(msg, "user alice logged in");
        assert_eq!(used, 1);
    }

    #[test]
    fn test_number_placeholders() {
        let args = [json!(91), json!("2.5"), json!(3.7)];
        let (msg, used) = format_message("disk %d%% full, %f, %i", &args);
        assert_eq!(msg, "disk 91% full, 2.5, 3");
        assert_eq!(used, 3);

        let (msg, _) = format_message("%d", &[json!("abc")]);
        assert_eq!(msg, "NaN");
    }

    #[test]
    fn test_json_placeholders() {
        let (msg, used) = format_message("%o %j", &[json!({"id": 3}), json!([1, 2])]);
        assert_eq!(msg, r#"{"id":3} [1,2]"#);
        assert_eq!(used, 2);
    }

    #[test]
    fn test_missing_arguments_keep_placeholder() {
        let (msg, used) = format_message("%s and %s", &[json!("a")]);
        assert_eq!(msg, "a and %s");
        assert_eq!(used, 1);
    }

    #[test]
    fn test_unknown_and_trailing_percent() {
        let (msg, used) = format_message("100%x %", &[json!(1)]);
        assert_eq!(msg, "100%x %");
        assert_eq!(used, 0);
    }

    #[test]
    fn test_no_placeholders() {
        let (msg, used) = format_message("failed", &[json!(3)]);
        assert_eq!(msg, "failed");
        assert_eq!(used, 0);
    }
}
