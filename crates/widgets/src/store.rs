//! Persisted widget-instance settings.
//!
//! The storage mechanism belongs to the host; this store only owns the
//! record shape (a string-keyed JSON map per instance) and the save path,
//! which always routes a form submission through the owning widget's
//! `update` codec before anything is persisted.

use crate::registry::WidgetRegistry;
use crate::widget::InstanceSettings;
use dashmap::DashMap;
use storefront_core::{StorefrontError, StorefrontResult};
use uuid::Uuid;

/// Thread-safe settings store keyed by widget instance id.
#[derive(Default)]
pub struct InstanceStore {
    instances: DashMap<Uuid, InstanceSettings>,
}

impl InstanceStore {
    pub fn new() -> Self {
        Self {
            instances: DashMap::new(),
        }
    }

    /// Create an empty instance record and return its id.
    pub fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.instances.insert(id, InstanceSettings::new());
        tracing::info!(instance_id = %id, "widget instance created");
        id
    }

    pub fn get(&self, id: &Uuid) -> Option<InstanceSettings> {
        self.instances.get(id).map(|s| s.clone())
    }

    /// Persist a settings form submission for `instance_id`.
    ///
    /// The submission is normalized by the widget's `update` codec against
    /// the previously stored record (an empty record for a fresh instance).
    /// Returns the persisted settings.
    pub fn save(
        &self,
        registry: &WidgetRegistry,
        widget_id: &str,
        instance_id: Uuid,
        submission: &InstanceSettings,
    ) -> StorefrontResult<InstanceSettings> {
        let widget = registry
            .get(widget_id)
            .ok_or_else(|| StorefrontError::UnknownWidget(widget_id.to_string()))?;

        let old = self.get(&instance_id).unwrap_or_default();
        let updated = widget.update(submission, &old);
        self.instances.insert(instance_id, updated.clone());

        tracing::info!(widget_id, instance_id = %instance_id, "widget settings saved");
        Ok(updated)
    }

    pub fn count(&self) -> usize {
        self.instances.len()
    }

    /// Serialize every instance record, for host-side persistence.
    pub fn export_json(&self) -> StorefrontResult<String> {
        let all: std::collections::BTreeMap<String, InstanceSettings> = self
            .instances
            .iter()
            .map(|e| (e.key().to_string(), e.value().clone()))
            .collect();
        Ok(serde_json::to_string_pretty(&all)?)
    }
}
