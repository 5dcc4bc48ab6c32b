//! Compact JSON-like rendering of a `Value`, used in logs and diagnostics.

use core::fmt::{self, Display, Formatter, Write};

use crate::Value;

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::String(s) => write_quoted(f, s),
            Value::Int(n) => write!(f, "{n}"),
            Value::Uint(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Time(t) => write_quoted(f, &t.to_rfc3339()),
            Value::Mapping(m) => {
                f.write_char('{')?;
                for (i, (key, value)) in m.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_quoted(f, key)?;
                    write!(f, ": {value}")?;
                }
                f.write_char('}')
            }
            Value::Sequence(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_char(']')
            }
        }
    }
}

fn write_quoted(f: &mut Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

#[cfg(test)]
mod tests {
    use crate::value;
    use insta::assert_snapshot;

    #[test]
    fn nested_rendering() {
        let v = value!({
            "name": "Ada \"the first\"",
            "age": 36,
            "ratio": 0.5,
            "tags": ["x", null, true],
            "empty": {}
        });
        assert_snapshot!(v.to_string(), @r#"{"name": "Ada \"the first\"", "age": 36, "ratio": 0.5, "tags": ["x", null, true], "empty": {}}"#);
    }
}
