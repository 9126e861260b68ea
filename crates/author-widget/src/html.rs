//! HTML serialization of a render plan into the layout-supplied chrome.
//!
//! Text is entity-escaped, hyperlink targets are validated and
//! attribute-escaped, and host-rendered avatar fragments are embedded
//! verbatim. A block absent from the plan emits zero bytes.

use crate::plan::{FieldBlock, RenderPlan};
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;
use storefront_core::StorefrontResult;
use storefront_widgets::{AvatarRenderer, LocaleFormatter, WidgetChrome};
use url::Url;

/// Hook-supplied markup injected inside the field list.
#[derive(Debug, Clone, Default)]
pub struct ListExtras {
    pub start: String,
    pub end: String,
}

/// Serialize the plan, wrapped in the widget chrome. The title renders as a
/// header block only when non-empty; callers pass it already filtered.
pub fn render_plan(
    plan: &RenderPlan,
    title: &str,
    chrome: &WidgetChrome,
    avatars: &dyn AvatarRenderer,
    locale: &dyn LocaleFormatter,
    extras: &ListExtras,
) -> StorefrontResult<String> {
    let mut out = String::new();

    out.push_str(&chrome.before_widget);

    if !title.is_empty() {
        write!(
            out,
            "{}{}{}",
            chrome.before_title,
            encode_text(title),
            chrome.after_title
        )?;
    }

    // Avatar and store-name header sit above the field list.
    for block in &plan.blocks {
        match block {
            FieldBlock::Avatar {
                author_id,
                display_name,
                size,
                profile_url,
            } => {
                let avatar = avatars.avatar_markup(*author_id, *size, display_name);
                out.push_str("<div class=\"downloadAuthor-avatar\">");
                match sanitized_url(profile_url.as_deref()) {
                    Some(url) => write!(
                        out,
                        "<a class=\"vendor-url\" href=\"{}\">{}</a>",
                        encode_double_quoted_attribute(url.as_str()),
                        avatar
                    )?,
                    None => out.push_str(&avatar),
                }
                out.push_str("</div>");
            }
            FieldBlock::StoreNameHeader { store_name } => {
                write!(
                    out,
                    "<h2 class=\"widget-title\">{}</h2>",
                    encode_text(store_name)
                )?;
            }
            _ => {}
        }
    }

    out.push_str("<ul>");
    out.push_str(&extras.start);

    for block in &plan.blocks {
        match block {
            FieldBlock::AuthorName {
                display_name,
                profile_url,
            } => {
                out.push_str("<li class=\"downloadAuthor-author\">");
                out.push_str("<span class=\"downloadAuthor-name\">Author:</span>");
                out.push_str("<span class=\"downloadAuthor-value\">");
                match sanitized_url(profile_url.as_deref()) {
                    Some(url) => write!(
                        out,
                        "<a class=\"vendor-url\" href=\"{}\">{}</a>",
                        encode_double_quoted_attribute(url.as_str()),
                        encode_text(display_name)
                    )?,
                    None => write!(out, "{}", encode_text(display_name))?,
                }
                out.push_str("</span></li>");
            }
            FieldBlock::SignupDate { registered_at } => {
                write!(
                    out,
                    "<li class=\"downloadAuthor-authorSignupDate\">\
                     <span class=\"downloadAuthor-name\">Author since:</span>\
                     <span class=\"downloadAuthor-value\">{}</span></li>",
                    encode_text(&locale.format_date(*registered_at))
                )?;
            }
            FieldBlock::Website { url } => {
                // An unparseable URL renders nothing rather than a broken link.
                if let Some(url) = sanitized_url(Some(url)) {
                    write!(
                        out,
                        "<li class=\"downloadAuthor-website\">\
                         <span class=\"downloadAuthor-name\">Website:</span>\
                         <span class=\"downloadAuthor-value\">\
                         <a href=\"{href}\" target=\"_blank\" rel=\"noopener\">{text}</a>\
                         </span></li>",
                        href = encode_double_quoted_attribute(url.as_str()),
                        text = encode_text(url.as_str())
                    )?;
                } else {
                    tracing::debug!(url = %url, "website url failed validation, omitting field");
                }
            }
            _ => {}
        }
    }

    out.push_str(&extras.end);
    out.push_str("</ul>");
    out.push_str(&chrome.after_widget);

    Ok(out)
}

/// Validate and normalize a hyperlink target. Only web schemes survive.
fn sanitized_url(raw: Option<&str>) -> Option<Url> {
    let url = Url::parse(raw?).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}
