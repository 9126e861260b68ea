//! Collaborator interfaces consumed by widgets, and the explicit render
//! context that carries them. Widgets are pure functions of this context;
//! nothing is read from ambient globals.

use crate::hooks::WidgetHooks;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use storefront_core::types::{AuthorProfile, ContentItem};

/// Host user-directory lookup. `None` when the author id is unknown.
pub trait AuthorDirectory: Send + Sync {
    fn author_profile(&self, author_id: u64) -> Option<AuthorProfile>;
}

/// Host avatar rendering. Returns an opaque markup fragment that widgets
/// embed verbatim.
pub trait AvatarRenderer: Send + Sync {
    fn avatar_markup(&self, user_id: u64, size: u32, alt: &str) -> String;
}

/// Vendor marketplace capability. Its presence in the render context is the
/// capability flag; widgets never probe for the extension at runtime.
pub trait VendorExtension: Send + Sync {
    fn vendor_profile_url(&self, author_id: u64) -> Option<String>;
    fn store_name(&self, author_id: u64) -> Option<String>;
}

/// Host locale/date formatting. Widgets delegate all date rendering here
/// and never hardcode a format string.
pub trait LocaleFormatter: Send + Sync {
    fn format_date(&self, ts: DateTime<Utc>) -> String;
}

/// Everything a widget render call may consult, passed explicitly per call.
#[derive(Clone)]
pub struct RenderContext {
    /// The content item the surrounding layout is rendering.
    pub item: ContentItem,
    pub authors: Arc<dyn AuthorDirectory>,
    pub avatars: Arc<dyn AvatarRenderer>,
    pub locale: Arc<dyn LocaleFormatter>,
    /// `Some` iff the vendor marketplace extension is active.
    pub vendor: Option<Arc<dyn VendorExtension>>,
    pub hooks: Arc<WidgetHooks>,
}

impl RenderContext {
    pub fn new(
        item: ContentItem,
        authors: Arc<dyn AuthorDirectory>,
        avatars: Arc<dyn AvatarRenderer>,
        locale: Arc<dyn LocaleFormatter>,
    ) -> Self {
        Self {
            item,
            authors,
            avatars,
            locale,
            vendor: None,
            hooks: Arc::new(WidgetHooks::new()),
        }
    }

    pub fn with_vendor(mut self, vendor: Arc<dyn VendorExtension>) -> Self {
        self.vendor = Some(vendor);
        self
    }

    pub fn with_hooks(mut self, hooks: Arc<WidgetHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn vendor_active(&self) -> bool {
        self.vendor.is_some()
    }

    /// Overlay vendor-owned profile fields from the extension. When the
    /// extension is inactive the fields are cleared, whatever the directory
    /// returned.
    pub fn resolve_vendor_fields(&self, profile: AuthorProfile) -> AuthorProfile {
        match &self.vendor {
            Some(vendor) => AuthorProfile {
                store_name: vendor.store_name(profile.id),
                vendor_profile_url: vendor.vendor_profile_url(profile.id),
                ..profile
            },
            None => AuthorProfile {
                store_name: None,
                vendor_profile_url: None,
                ..profile
            },
        }
    }
}
