//! Download-author widget: renders the author's (or vendor's) details in
//! the download sidebar. Exists as a configurable alternative to the
//! default author block so sidebars can be rearranged freely.
//!
//! The pipeline is options resolution -> visibility gate -> field plan ->
//! HTML serialization, with all host data arriving through the injected
//! providers of `storefront-widgets`.

pub mod html;
pub mod options;
pub mod plan;
pub mod settings;
pub mod widget;

pub use options::{AuthorWidgetDefaults, AuthorWidgetOptions};
pub use plan::{build_plan, FieldBlock, RenderPlan};
pub use widget::{should_render, AuthorInfoWidget, WIDGET_ID};
