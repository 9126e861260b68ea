//! Widget registration under stable identifiers.

use crate::widget::Widget;
use dashmap::DashMap;
use std::sync::Arc;

/// Thread-safe registry of available widgets, keyed by stable id.
#[derive(Default)]
pub struct WidgetRegistry {
    widgets: DashMap<&'static str, Arc<dyn Widget>>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self {
            widgets: DashMap::new(),
        }
    }

    /// Register a widget under its stable id. Registering again under the
    /// same id replaces the previous entry.
    pub fn register(&self, widget: Arc<dyn Widget>) {
        let id = widget.id();
        let replaced = self.widgets.insert(id, widget).is_some();
        tracing::info!(widget_id = id, replaced, "widget registered");
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn Widget>> {
        self.widgets.get(id).map(|w| w.clone())
    }

    /// Registered ids, for admin listings.
    pub fn ids(&self) -> Vec<&'static str> {
        self.widgets.iter().map(|e| *e.key()).collect()
    }

    pub fn count(&self) -> usize {
        self.widgets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::RenderContext;
    use crate::widget::{AdminContext, FormField, InstanceSettings, WidgetChrome};
    use storefront_core::StorefrontResult;

    struct StaticWidget {
        id: &'static str,
        output: &'static str,
    }

    impl Widget for StaticWidget {
        fn id(&self) -> &'static str {
            self.id
        }
        fn name(&self) -> String {
            "Static".to_string()
        }
        fn description(&self) -> String {
            "Fixed output".to_string()
        }
        fn render(
            &self,
            _ctx: &RenderContext,
            _instance: &InstanceSettings,
            _chrome: &WidgetChrome,
        ) -> StorefrontResult<String> {
            Ok(self.output.to_string())
        }
        fn form(&self, _instance: &InstanceSettings, _ctx: &AdminContext) -> Vec<FormField> {
            Vec::new()
        }
        fn update(
            &self,
            new_instance: &InstanceSettings,
            _old_instance: &InstanceSettings,
        ) -> InstanceSettings {
            new_instance.clone()
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = WidgetRegistry::new();
        registry.register(Arc::new(StaticWidget {
            id: "static",
            output: "a",
        }));

        assert_eq!(registry.count(), 1);
        assert!(registry.get("static").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_reregistration_replaces() {
        let registry = WidgetRegistry::new();
        registry.register(Arc::new(StaticWidget {
            id: "static",
            output: "a",
        }));
        registry.register(Arc::new(StaticWidget {
            id: "static",
            output: "b",
        }));

        assert_eq!(registry.count(), 1);
        let widget = registry.get("static").unwrap();
        let ctx = crate::testkit::sample_ctx(1);
        let html = widget
            .render(&ctx, &InstanceSettings::new(), &WidgetChrome::default())
            .unwrap();
        assert_eq!(html, "b");
    }
}
