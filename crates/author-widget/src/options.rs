//! Widget option resolution: merge a persisted instance map with defaults.

use crate::settings::value_truthy;
use serde_json::Value;
use storefront_core::config::AuthorWidgetConfig;
use storefront_widgets::InstanceSettings;

pub const KEY_TITLE: &str = "title";
pub const KEY_AVATAR: &str = "avatar";
pub const KEY_STORE_NAME: &str = "store_name";
pub const KEY_NAME: &str = "name";
pub const KEY_SIGNUP_DATE: &str = "signup_date";
pub const KEY_WEBSITE: &str = "website";
pub const KEY_AVATAR_SIZE: &str = "avatar_size";

/// The boolean field toggles, in their fixed display order.
pub const FLAG_KEYS: [&str; 5] = [
    KEY_AVATAR,
    KEY_STORE_NAME,
    KEY_NAME,
    KEY_SIGNUP_DATE,
    KEY_WEBSITE,
];

/// Theme-level defaults applied wherever an instance is silent.
#[derive(Debug, Clone)]
pub struct AuthorWidgetDefaults {
    pub avatar_size: u32,
}

impl Default for AuthorWidgetDefaults {
    fn default() -> Self {
        Self { avatar_size: 96 }
    }
}

impl From<&AuthorWidgetConfig> for AuthorWidgetDefaults {
    fn from(config: &AuthorWidgetConfig) -> Self {
        Self {
            avatar_size: config.avatar_size,
        }
    }
}

/// Effective options for one render call. Built by [`AuthorWidgetOptions::resolve`],
/// never mutated afterwards, discarded after the render.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorWidgetOptions {
    pub title: String,
    pub avatar: bool,
    pub store_name: bool,
    pub name: bool,
    pub signup_date: bool,
    pub website: bool,
    /// Whether the author block may display at all. Forced on in widget
    /// render context; layouts that suppress the default author block do so
    /// outside the widget.
    pub show: bool,
    pub avatar_size: u32,
}

impl AuthorWidgetOptions {
    /// All toggles on, empty title, avatar size from the theme defaults.
    pub fn defaults(defaults: &AuthorWidgetDefaults) -> Self {
        Self {
            title: String::new(),
            avatar: true,
            store_name: true,
            name: true,
            signup_date: true,
            website: true,
            show: true,
            avatar_size: defaults.avatar_size,
        }
    }

    /// Merge a persisted instance over the defaults.
    ///
    /// Recognized keys take the instance's value when present; anything
    /// missing or malformed degrades to the default. Unrecognized keys are
    /// ignored so newer settings shapes stay loadable. `show` is always
    /// forced on: placing the widget is the decision to display.
    pub fn resolve(raw: &InstanceSettings, defaults: &AuthorWidgetDefaults) -> Self {
        let mut options = Self::defaults(defaults);

        if let Some(Value::String(title)) = raw.get(KEY_TITLE) {
            options.title = title.clone();
        }

        options.avatar = flag(raw, KEY_AVATAR, options.avatar);
        options.store_name = flag(raw, KEY_STORE_NAME, options.store_name);
        options.name = flag(raw, KEY_NAME, options.name);
        options.signup_date = flag(raw, KEY_SIGNUP_DATE, options.signup_date);
        options.website = flag(raw, KEY_WEBSITE, options.website);

        if let Some(size) = raw.get(KEY_AVATAR_SIZE).and_then(Value::as_u64) {
            options.avatar_size = size as u32;
        }

        options.show = true;
        options
    }
}

/// Read a boolean toggle leniently. Saves write strict booleans, but
/// instances written by older code may hold form-style strings.
fn flag(raw: &InstanceSettings, key: &str, default: bool) -> bool {
    match raw.get(key) {
        None => default,
        Some(Value::Bool(b)) => *b,
        Some(value @ (Value::String(_) | Value::Number(_))) => value_truthy(value),
        Some(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(entries: &[(&str, Value)]) -> InstanceSettings {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_absent_keys_resolve_to_defaults() {
        let defaults = AuthorWidgetDefaults::default();
        let options = AuthorWidgetOptions::resolve(&InstanceSettings::new(), &defaults);
        assert_eq!(options, AuthorWidgetOptions::defaults(&defaults));
    }

    #[test]
    fn test_instance_values_override_defaults() {
        let defaults = AuthorWidgetDefaults::default();
        let instance = raw(&[
            (KEY_TITLE, json!("About the author")),
            (KEY_AVATAR, json!(false)),
            (KEY_WEBSITE, json!(false)),
        ]);

        let options = AuthorWidgetOptions::resolve(&instance, &defaults);
        assert_eq!(options.title, "About the author");
        assert!(!options.avatar);
        assert!(!options.website);
        // Untouched keys keep their defaults.
        assert!(options.name);
        assert!(options.signup_date);
        assert!(options.store_name);
    }

    #[test]
    fn test_show_is_always_forced_on() {
        let defaults = AuthorWidgetDefaults::default();
        let instance = raw(&[("show", json!(false))]);
        let options = AuthorWidgetOptions::resolve(&instance, &defaults);
        assert!(options.show);
    }

    #[test]
    fn test_legacy_string_flags() {
        let defaults = AuthorWidgetDefaults::default();
        let instance = raw(&[
            (KEY_AVATAR, json!("on")),
            (KEY_NAME, json!("")),
            (KEY_WEBSITE, json!("0")),
        ]);

        let options = AuthorWidgetOptions::resolve(&instance, &defaults);
        assert!(options.avatar);
        assert!(!options.name);
        assert!(!options.website);
    }

    #[test]
    fn test_malformed_values_degrade_to_defaults() {
        let defaults = AuthorWidgetDefaults::default();
        let instance = raw(&[
            (KEY_AVATAR, json!(["nested"])),
            (KEY_TITLE, json!(42)),
            (KEY_AVATAR_SIZE, json!("large")),
        ]);

        let options = AuthorWidgetOptions::resolve(&instance, &defaults);
        assert!(options.avatar);
        assert_eq!(options.title, "");
        assert_eq!(options.avatar_size, defaults.avatar_size);
    }

    #[test]
    fn test_unrecognized_keys_ignored() {
        let defaults = AuthorWidgetDefaults::default();
        let instance = raw(&[("future_toggle", json!(true)), ("color", json!("red"))]);
        let options = AuthorWidgetOptions::resolve(&instance, &defaults);
        assert_eq!(options, AuthorWidgetOptions::defaults(&defaults));
    }

    #[test]
    fn test_avatar_size_override() {
        let defaults = AuthorWidgetDefaults { avatar_size: 96 };
        let instance = raw(&[(KEY_AVATAR_SIZE, json!(300))]);
        let options = AuthorWidgetOptions::resolve(&instance, &defaults);
        assert_eq!(options.avatar_size, 300);
    }
}
