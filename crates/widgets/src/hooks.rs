//! Extensibility hooks in the filter-chain style: external collaborators
//! may transform a widget title, veto rendering, or inject extra markup
//! around a widget's field list. Hooks are registered once at setup and
//! applied in registration order.

use storefront_core::types::ContentItem;

/// Context handed to every hook invocation.
#[derive(Debug, Clone)]
pub struct FilterContext {
    /// Stable id of the widget being rendered.
    pub widget_id: &'static str,
    /// The content item being rendered, when there is one.
    pub item: Option<ContentItem>,
}

impl FilterContext {
    pub fn new(widget_id: &'static str) -> Self {
        Self {
            widget_id,
            item: None,
        }
    }

    pub fn with_item(mut self, item: ContentItem) -> Self {
        self.item = Some(item);
        self
    }
}

type TitleFilterFn = Box<dyn Fn(String, &FilterContext) -> String + Send + Sync>;
type VisibilityFilterFn = Box<dyn Fn(bool, &FilterContext) -> bool + Send + Sync>;
type ListActionFn = Box<dyn Fn(&FilterContext) -> String + Send + Sync>;

/// Registered hook chains. Built mutably during setup, then shared
/// immutably with render contexts.
#[derive(Default)]
pub struct WidgetHooks {
    title_filters: Vec<TitleFilterFn>,
    visibility_filters: Vec<VisibilityFilterFn>,
    list_start_actions: Vec<ListActionFn>,
    list_end_actions: Vec<ListActionFn>,
}

impl WidgetHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_title<F>(&mut self, filter: F) -> &mut Self
    where
        F: Fn(String, &FilterContext) -> String + Send + Sync + 'static,
    {
        self.title_filters.push(Box::new(filter));
        self
    }

    pub fn on_visibility<F>(&mut self, filter: F) -> &mut Self
    where
        F: Fn(bool, &FilterContext) -> bool + Send + Sync + 'static,
    {
        self.visibility_filters.push(Box::new(filter));
        self
    }

    pub fn on_list_start<F>(&mut self, action: F) -> &mut Self
    where
        F: Fn(&FilterContext) -> String + Send + Sync + 'static,
    {
        self.list_start_actions.push(Box::new(action));
        self
    }

    pub fn on_list_end<F>(&mut self, action: F) -> &mut Self
    where
        F: Fn(&FilterContext) -> String + Send + Sync + 'static,
    {
        self.list_end_actions.push(Box::new(action));
        self
    }

    /// Run the title through every registered filter, once, in order.
    pub fn apply_title(&self, title: String, ctx: &FilterContext) -> String {
        self.title_filters
            .iter()
            .fold(title, |t, filter| filter(t, ctx))
    }

    /// Chain the visibility filters from `default`. The final boolean is an
    /// opaque veto decision; the widget does not interpret it further.
    pub fn apply_visibility(&self, default: bool, ctx: &FilterContext) -> bool {
        self.visibility_filters
            .iter()
            .fold(default, |v, filter| filter(v, ctx))
    }

    /// Markup injected at the start of a widget's field list.
    pub fn list_start_markup(&self, ctx: &FilterContext) -> String {
        self.list_start_actions
            .iter()
            .map(|action| action(ctx))
            .collect()
    }

    /// Markup injected at the end of a widget's field list.
    pub fn list_end_markup(&self, ctx: &FilterContext) -> String {
        self.list_end_actions
            .iter()
            .map(|action| action(ctx))
            .collect()
    }
}
