//! Shared in-memory fakes for unit tests.

use crate::providers::{
    AuthorDirectory, AvatarRenderer, LocaleFormatter, RenderContext, VendorExtension,
};
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use storefront_core::types::{AuthorProfile, ContentItem};

pub struct FakeDirectory {
    pub profiles: Vec<AuthorProfile>,
}

impl AuthorDirectory for FakeDirectory {
    fn author_profile(&self, author_id: u64) -> Option<AuthorProfile> {
        self.profiles.iter().find(|p| p.id == author_id).cloned()
    }
}

pub struct FakeAvatars;

impl AvatarRenderer for FakeAvatars {
    fn avatar_markup(&self, user_id: u64, size: u32, alt: &str) -> String {
        format!(r#"<img src="/avatar/{user_id}?s={size}" alt="{alt}" />"#)
    }
}

pub struct IsoLocale;

impl LocaleFormatter for IsoLocale {
    fn format_date(&self, ts: DateTime<Utc>) -> String {
        ts.format("%Y-%m-%d").to_string()
    }
}

pub struct FakeVendor;

impl VendorExtension for FakeVendor {
    fn vendor_profile_url(&self, author_id: u64) -> Option<String> {
        Some(format!("https://shop.example/vendor/{author_id}"))
    }
    fn store_name(&self, _author_id: u64) -> Option<String> {
        Some("Pixel Goods".to_string())
    }
}

pub fn sample_profile(author_id: u64) -> AuthorProfile {
    AuthorProfile {
        id: author_id,
        display_name: "Ada Lovelace".to_string(),
        registered_at: Utc.with_ymd_and_hms(2019, 6, 1, 0, 0, 0).unwrap(),
        website_url: Some("https://ada.example".to_string()),
        store_name: None,
        vendor_profile_url: None,
    }
}

pub fn sample_ctx(author_id: u64) -> RenderContext {
    RenderContext::new(
        ContentItem::download(author_id),
        Arc::new(FakeDirectory {
            profiles: vec![sample_profile(author_id)],
        }),
        Arc::new(FakeAvatars),
        Arc::new(IsoLocale),
    )
}
