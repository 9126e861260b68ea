//! Widget framework for the Storefront Express presentation layer.
//! Replaces the host platform's ambient widget machinery with explicit
//! registration, instance storage, hooks, and injected data providers.
//!
//! # Modules
//!
//! - [`widget`] - The `Widget` trait, chrome fragments, admin form fields
//! - [`registry`] - Widget registration under stable identifiers
//! - [`store`] - Persisted per-instance settings and the save path
//! - [`hooks`] - Title filters, visibility vetoes, list actions
//! - [`providers`] - Collaborator traits and the explicit render context
//! - [`sidebar`] - Placement list that drives widget rendering
//! - [`testkit`] - In-memory provider fakes for tests

pub mod hooks;
pub mod providers;
pub mod registry;
pub mod sidebar;
pub mod store;
pub mod testkit;
pub mod widget;

pub use hooks::{FilterContext, WidgetHooks};
pub use providers::{
    AuthorDirectory, AvatarRenderer, LocaleFormatter, RenderContext, VendorExtension,
};
pub use registry::WidgetRegistry;
pub use sidebar::Sidebar;
pub use store::InstanceStore;
pub use widget::{AdminContext, FormField, InstanceSettings, Widget, WidgetChrome};
