//! Field-plan assembly: decide which author fields render, with what data,
//! in the fixed presentation order.

use crate::options::AuthorWidgetOptions;
use chrono::{DateTime, Utc};
use storefront_core::types::AuthorProfile;

/// One display field block, carrying data rather than markup.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldBlock {
    Avatar {
        author_id: u64,
        display_name: String,
        size: u32,
        /// Vendor profile link wrapping the avatar, vendor mode only.
        profile_url: Option<String>,
    },
    StoreNameHeader {
        store_name: String,
    },
    AuthorName {
        display_name: String,
        profile_url: Option<String>,
    },
    SignupDate {
        registered_at: DateTime<Utc>,
    },
    Website {
        url: String,
    },
}

/// The ordered, filtered set of field blocks computed before serialization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderPlan {
    pub blocks: Vec<FieldBlock>,
}

impl RenderPlan {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Build the render plan for a profile under the resolved options.
///
/// Pure function. A block is included iff its option flag is on and the
/// backing data is non-empty. Vendor-owned data (store name, vendor profile
/// link) is only consulted when `vendor_active`; without the extension those
/// blocks are omitted no matter what the flags or the profile say.
///
/// Field order is a presentation contract: avatar, store-name header,
/// author name, signup date, website.
pub fn build_plan(
    profile: &AuthorProfile,
    options: &AuthorWidgetOptions,
    vendor_active: bool,
) -> RenderPlan {
    let vendor_url = if vendor_active {
        profile
            .vendor_profile_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .map(str::to_string)
    } else {
        None
    };

    let mut blocks = Vec::new();

    if options.avatar {
        blocks.push(FieldBlock::Avatar {
            author_id: profile.id,
            display_name: profile.display_name.clone(),
            size: options.avatar_size,
            profile_url: vendor_url.clone(),
        });
    }

    if options.store_name && vendor_active {
        if let Some(store_name) = profile.store_name.as_deref().filter(|s| !s.is_empty()) {
            blocks.push(FieldBlock::StoreNameHeader {
                store_name: store_name.to_string(),
            });
        }
    }

    if options.name {
        blocks.push(FieldBlock::AuthorName {
            display_name: profile.display_name.clone(),
            profile_url: vendor_url,
        });
    }

    if options.signup_date {
        blocks.push(FieldBlock::SignupDate {
            registered_at: profile.registered_at,
        });
    }

    if options.website {
        if let Some(url) = profile.website_url.as_deref().filter(|u| !u.is_empty()) {
            blocks.push(FieldBlock::Website {
                url: url.to_string(),
            });
        }
    }

    RenderPlan { blocks }
}
