//! Minimal HTML tag rendering for asset tags

/// Elements rendered without a closing tag
const VOID_ELEMENTS: &[&str] = &["base", "link", "meta"];

/// Attributes rendered bare (`defer`) when their value is empty
const BOOLEAN_ATTRIBUTES: &[&str] = &["async", "defer"];

/// Escape a value for use inside a double-quoted attribute
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render a tag. Attributes set to `None` are omitted. An empty value
/// renders bare for boolean attributes and as `name=""` otherwise.
pub fn create_tag(tag: &str, attributes: &[(&str, Option<&str>)], content: Option<&str>) -> String {
    let mut html = format!("<{}", tag);
    for (name, value) in attributes {
        match value {
            Some("") if BOOLEAN_ATTRIBUTES.contains(name) => {
                html.push(' ');
                html.push_str(name);
            }
            Some(value) => {
                html.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
            }
            None => {}
        }
    }
    html.push('>');

    if !VOID_ELEMENTS.contains(&tag) {
        html.push_str(content.unwrap_or_default());
        html.push_str(&format!("</{}>", tag));
    }
    html
}
