//! Settings round trip for the admin form, independent of the render path:
//! `decode` turns a persisted record into effective options, `encode`
//! normalizes a form submission into the persisted shape.

use crate::options::{AuthorWidgetDefaults, AuthorWidgetOptions, FLAG_KEYS, KEY_TITLE};
use serde_json::Value;
use storefront_widgets::InstanceSettings;

/// Read a persisted instance into effective options.
pub fn decode(persisted: &InstanceSettings, defaults: &AuthorWidgetDefaults) -> AuthorWidgetOptions {
    AuthorWidgetOptions::resolve(persisted, defaults)
}

/// Normalize a settings form submission against the previous instance.
///
/// Every boolean toggle is recomputed strictly from the submission: a
/// checked box arrives as some truthy value, an unchecked box is simply
/// absent and becomes `false`, whatever the old value was. The title is
/// stripped of markup tags. Unrecognized keys from the previous instance
/// are carried over untouched.
pub fn encode(submission: &InstanceSettings, previous: &InstanceSettings) -> InstanceSettings {
    let mut instance = previous.clone();

    let title = submission
        .get(KEY_TITLE)
        .filter(|v| value_truthy(v))
        .and_then(Value::as_str)
        .map(strip_tags)
        .unwrap_or_default();
    instance.insert(KEY_TITLE.to_string(), Value::String(title));

    for key in FLAG_KEYS {
        let checked = submission.get(key).map(value_truthy).unwrap_or(false);
        instance.insert(key.to_string(), Value::Bool(checked));
    }

    instance
}

/// Truthiness in the host-form sense: absent, `null`, `false`, `0`, `""`,
/// `"0"`, and empty collections are falsy; everything else is truthy.
pub fn value_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Remove `<...>` tag runs from a title before persistence. An unterminated
/// tag swallows the rest of the string.
pub fn strip_tags(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut in_tag = false;

    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => output.push(c),
            _ => {}
        }
    }

    output
}
