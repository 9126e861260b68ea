//! In-memory demo providers standing in for the host platform.

use chrono::{DateTime, TimeZone, Utc};
use storefront_core::config::AuthorWidgetConfig;
use storefront_core::types::AuthorProfile;
use storefront_widgets::{AuthorDirectory, AvatarRenderer, LocaleFormatter, VendorExtension};

/// Fixed author directory seeded with a few demo profiles.
pub struct DemoDirectory {
    profiles: Vec<AuthorProfile>,
}

impl DemoDirectory {
    pub fn seeded() -> Self {
        let profiles = vec![
            AuthorProfile {
                id: 1,
                display_name: "Ada Lovelace".to_string(),
                registered_at: Utc.with_ymd_and_hms(2019, 6, 1, 9, 30, 0).unwrap(),
                website_url: Some("https://ada.example".to_string()),
                store_name: None,
                vendor_profile_url: None,
            },
            AuthorProfile {
                id: 2,
                display_name: "Grace Hopper".to_string(),
                registered_at: Utc.with_ymd_and_hms(2021, 2, 14, 18, 0, 0).unwrap(),
                website_url: None,
                store_name: None,
                vendor_profile_url: None,
            },
        ];
        tracing::info!(count = profiles.len(), "demo author directory seeded");
        Self { profiles }
    }
}

impl AuthorDirectory for DemoDirectory {
    fn author_profile(&self, author_id: u64) -> Option<AuthorProfile> {
        self.profiles.iter().find(|p| p.id == author_id).cloned()
    }
}

/// Renders avatars as plain `<img>` fragments against a local avatar route.
pub struct DemoAvatars;

impl AvatarRenderer for DemoAvatars {
    fn avatar_markup(&self, user_id: u64, size: u32, alt: &str) -> String {
        format!(
            r#"<img src="/avatars/{user_id}.png" width="{size}" height="{size}" alt="{alt}" />"#
        )
    }
}

/// Formats dates with the site-configured format string.
pub struct SiteLocale {
    date_format: String,
}

impl SiteLocale {
    pub fn new(config: &AuthorWidgetConfig) -> Self {
        Self {
            date_format: config.date_format.clone(),
        }
    }
}

impl LocaleFormatter for SiteLocale {
    fn format_date(&self, ts: DateTime<Utc>) -> String {
        ts.format(&self.date_format).to_string()
    }
}

/// Marketplace extension mapping every author to a demo storefront.
pub struct DemoVendor;

impl VendorExtension for DemoVendor {
    fn vendor_profile_url(&self, author_id: u64) -> Option<String> {
        Some(format!("https://marketplace.example/vendor/{author_id}"))
    }

    fn store_name(&self, author_id: u64) -> Option<String> {
        match author_id {
            1 => Some("Analytical Engines".to_string()),
            2 => Some("Compiler Corner".to_string()),
            _ => None,
        }
    }
}
