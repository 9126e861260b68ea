//! The widget contract: render, admin form, and settings update.

use crate::providers::RenderContext;
use serde::Serialize;
use storefront_core::StorefrontResult;

/// Persisted settings for one placed widget instance. String-keyed JSON map
/// so that widgets can evolve their recognized keys without migrations.
pub type InstanceSettings = serde_json::Map<String, serde_json::Value>;

/// Opaque markup fragments supplied by the enclosing layout system.
/// Widgets wrap their output in these and never construct them.
#[derive(Debug, Clone, Default)]
pub struct WidgetChrome {
    pub before_widget: String,
    pub after_widget: String,
    pub before_title: String,
    pub after_title: String,
}

/// Ambient admin-screen state relevant to settings forms.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminContext {
    /// Whether the vendor marketplace extension is active. Conditional form
    /// fields key off this, not off any runtime plugin probing.
    pub vendor_active: bool,
}

/// A single control on a widget settings form, in display order.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FormField {
    /// Static usage note shown above the controls.
    Note { text: String },
    Text {
        key: &'static str,
        label: String,
        value: String,
    },
    Checkbox {
        key: &'static str,
        label: String,
        checked: bool,
    },
}

/// A configurable, independently placeable UI block rendered into a layout
/// region by the sidebar driver.
pub trait Widget: Send + Sync {
    /// Stable identifier the widget is registered under.
    fn id(&self) -> &'static str;

    /// Human-readable widget name for admin screens.
    fn name(&self) -> String;

    /// One-line description for admin screens.
    fn description(&self) -> String;

    /// Render one instance into markup. An empty string means the widget
    /// declined to render (wrong content type, visibility veto); it is not
    /// an error.
    fn render(
        &self,
        ctx: &RenderContext,
        instance: &InstanceSettings,
        chrome: &WidgetChrome,
    ) -> StorefrontResult<String>;

    /// Describe the admin settings form for the given instance.
    fn form(&self, instance: &InstanceSettings, ctx: &AdminContext) -> Vec<FormField>;

    /// Normalize a settings form submission against the previous instance.
    /// This is the only mutation path for persisted settings.
    fn update(
        &self,
        new_instance: &InstanceSettings,
        old_instance: &InstanceSettings,
    ) -> InstanceSettings;
}
