//! Sidebar driver: an ordered list of widget placements rendered with a
//! shared chrome. Emits only what the placed widgets emit; page markup
//! around the sidebar belongs to the host layout.

use crate::providers::RenderContext;
use crate::registry::WidgetRegistry;
use crate::store::InstanceStore;
use crate::widget::{InstanceSettings, WidgetChrome};
use storefront_core::StorefrontResult;
use uuid::Uuid;

/// One placed widget: which widget, with which saved settings.
#[derive(Debug, Clone)]
pub struct Placement {
    pub widget_id: &'static str,
    pub instance_id: Uuid,
}

/// A layout region holding widget placements in display order.
pub struct Sidebar {
    pub id: String,
    chrome: WidgetChrome,
    placements: Vec<Placement>,
}

impl Sidebar {
    pub fn new(id: impl Into<String>, chrome: WidgetChrome) -> Self {
        Self {
            id: id.into(),
            chrome,
            placements: Vec::new(),
        }
    }

    pub fn place(&mut self, widget_id: &'static str, instance_id: Uuid) -> &mut Self {
        self.placements.push(Placement {
            widget_id,
            instance_id,
        });
        self
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Render every placement in order and concatenate the output.
    ///
    /// Presentation is best-effort: a placement referencing an unregistered
    /// widget is skipped with a debug log, and a missing instance record
    /// renders with default settings. Widgets that decline to render
    /// contribute zero bytes.
    pub fn render(
        &self,
        ctx: &RenderContext,
        registry: &WidgetRegistry,
        store: &InstanceStore,
    ) -> StorefrontResult<String> {
        let mut output = String::new();

        for placement in &self.placements {
            let Some(widget) = registry.get(placement.widget_id) else {
                tracing::debug!(
                    sidebar = %self.id,
                    widget_id = placement.widget_id,
                    "placement references unregistered widget, skipping"
                );
                continue;
            };

            let instance = store
                .get(&placement.instance_id)
                .unwrap_or_else(InstanceSettings::new);

            output.push_str(&widget.render(ctx, &instance, &self.chrome)?);
        }

        tracing::debug!(
            sidebar = %self.id,
            placements = self.placements.len(),
            bytes = output.len(),
            "sidebar rendered"
        );
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::sample_ctx;
    use crate::widget::{AdminContext, FormField, Widget};
    use std::sync::Arc;

    struct EchoWidget(&'static str);

    impl Widget for EchoWidget {
        fn id(&self) -> &'static str {
            self.0
        }
        fn name(&self) -> String {
            self.0.to_string()
        }
        fn description(&self) -> String {
            String::new()
        }
        fn render(
            &self,
            _ctx: &RenderContext,
            _instance: &InstanceSettings,
            _chrome: &WidgetChrome,
        ) -> StorefrontResult<String> {
            Ok(format!("[{}]", self.0))
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
    fn test_renders_placements_in_order() {
        let registry = WidgetRegistry::new();
        registry.register(Arc::new(EchoWidget("first")));
        registry.register(Arc::new(EchoWidget("second")));
        let store = InstanceStore::new();

        let mut sidebar = Sidebar::new("download-sidebar", WidgetChrome::default());
        sidebar.place("first", store.create());
        sidebar.place("second", store.create());

        let html = sidebar
            .render(&sample_ctx(1), &registry, &store)
            .unwrap();
        assert_eq!(html, "[first][second]");
    }

    #[test]
    fn test_unregistered_widget_is_skipped() {
        let registry = WidgetRegistry::new();
        registry.register(Arc::new(EchoWidget("known")));
        let store = InstanceStore::new();

        let mut sidebar = Sidebar::new("download-sidebar", WidgetChrome::default());
        sidebar.place("ghost", store.create());
        sidebar.place("known", store.create());

        let html = sidebar
            .render(&sample_ctx(1), &registry, &store)
            .unwrap();
        assert_eq!(html, "[known]");
    }
}
