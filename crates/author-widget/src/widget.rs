//! The download-author widget: gate, resolve, plan, serialize.

use crate::html::{render_plan, ListExtras};
use crate::options::{
    AuthorWidgetDefaults, AuthorWidgetOptions, KEY_AVATAR, KEY_NAME, KEY_SIGNUP_DATE,
    KEY_STORE_NAME, KEY_TITLE, KEY_WEBSITE,
};
use crate::plan::build_plan;
use crate::settings;
use storefront_core::config::AuthorWidgetConfig;
use storefront_core::StorefrontResult;
use storefront_widgets::{
    AdminContext, FilterContext, FormField, InstanceSettings, RenderContext, Widget, WidgetChrome,
};

/// Stable identifier the widget registers under.
pub const WIDGET_ID: &str = "storefront_download_author";

/// Whether any author-info output should be produced at all. External
/// visibility filters may veto; the decision is opaque to the widget.
pub fn should_render(
    options: &AuthorWidgetOptions,
    ctx: &RenderContext,
    fctx: &FilterContext,
) -> bool {
    ctx.item.post_type.is_download() && options.show && ctx.hooks.apply_visibility(true, fctx)
}

pub struct AuthorInfoWidget {
    defaults: AuthorWidgetDefaults,
}

impl AuthorInfoWidget {
    pub fn new(config: &AuthorWidgetConfig) -> Self {
        Self {
            defaults: AuthorWidgetDefaults::from(config),
        }
    }
}

impl Widget for AuthorInfoWidget {
    fn id(&self) -> &'static str {
        WIDGET_ID
    }

    fn name(&self) -> String {
        "Storefront: Download Author".to_string()
    }

    fn description(&self) -> String {
        "Display the download author's details.".to_string()
    }

    fn render(
        &self,
        ctx: &RenderContext,
        instance: &InstanceSettings,
        chrome: &WidgetChrome,
    ) -> StorefrontResult<String> {
        let fctx = FilterContext::new(WIDGET_ID).with_item(ctx.item.clone());

        let mut options = AuthorWidgetOptions::resolve(instance, &self.defaults);
        options.title = ctx.hooks.apply_title(options.title, &fctx);

        if !should_render(&options, ctx, &fctx) {
            tracing::debug!(
                post_type = ?ctx.item.post_type,
                "author info suppressed, emitting nothing"
            );
            return Ok(String::new());
        }

        let Some(profile) = ctx.authors.author_profile(ctx.item.author_id) else {
            tracing::debug!(
                author_id = ctx.item.author_id,
                "author not found, emitting nothing"
            );
            return Ok(String::new());
        };

        let profile = ctx.resolve_vendor_fields(profile);
        let plan = build_plan(&profile, &options, ctx.vendor_active());

        let extras = ListExtras {
            start: ctx.hooks.list_start_markup(&fctx),
            end: ctx.hooks.list_end_markup(&fctx),
        };

        let html = render_plan(
            &plan,
            &options.title,
            chrome,
            ctx.avatars.as_ref(),
            ctx.locale.as_ref(),
            &extras,
        )?;

        tracing::debug!(
            author_id = profile.id,
            blocks = plan.blocks.len(),
            vendor = ctx.vendor_active(),
            "author info rendered"
        );
        Ok(html)
    }

    fn form(&self, instance: &InstanceSettings, ctx: &AdminContext) -> Vec<FormField> {
        let options = settings::decode(instance, &self.defaults);

        let mut fields = vec![
            FormField::Note {
                text: "Only for use in the download sidebar".to_string(),
            },
            FormField::Text {
                key: KEY_TITLE,
                label: "Title:".to_string(),
                value: options.title,
            },
            FormField::Checkbox {
                key: KEY_AVATAR,
                label: "Show author avatar".to_string(),
                checked: options.avatar,
            },
        ];

        if ctx.vendor_active {
            fields.push(FormField::Checkbox {
                key: KEY_STORE_NAME,
                label: "Show store name".to_string(),
                checked: options.store_name,
            });
        }

        fields.push(FormField::Checkbox {
            key: KEY_NAME,
            label: "Show author name".to_string(),
            checked: options.name,
        });
        fields.push(FormField::Checkbox {
            key: KEY_SIGNUP_DATE,
            label: "Show author signup date".to_string(),
            checked: options.signup_date,
        });
        fields.push(FormField::Checkbox {
            key: KEY_WEBSITE,
            label: "Show website".to_string(),
            checked: options.website,
        });

        fields
    }

    fn update(
        &self,
        new_instance: &InstanceSettings,
        old_instance: &InstanceSettings,
    ) -> InstanceSettings {
        settings::encode(new_instance, old_instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use storefront_core::types::{ContentItem, PostType};
    use storefront_widgets::testkit::{sample_ctx, FakeVendor};

    fn widget() -> AuthorInfoWidget {
        AuthorInfoWidget::new(&AuthorWidgetConfig::default())
    }

    fn instance(entries: &[(&str, serde_json::Value)]) -> InstanceSettings {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_non_download_renders_nothing() {
        let mut ctx = sample_ctx(1);
        ctx.item = ContentItem {
            post_type: PostType::Post,
            ..ctx.item
        };

        let html = widget()
            .render(&ctx, &InstanceSettings::new(), &WidgetChrome::default())
            .unwrap();
        assert!(html.is_empty());
    }

    #[test]
    fn test_visibility_veto_renders_nothing() {
        let mut hooks = storefront_widgets::WidgetHooks::new();
        hooks.on_visibility(|_, _| false);
        let ctx = sample_ctx(1).with_hooks(Arc::new(hooks));

        let html = widget()
            .render(&ctx, &InstanceSettings::new(), &WidgetChrome::default())
            .unwrap();
        assert!(html.is_empty());
    }

    #[test]
    fn test_unknown_author_renders_nothing() {
        let mut ctx = sample_ctx(1);
        ctx.item = ContentItem {
            author_id: 999,
            ..ctx.item
        };

        let html = widget()
            .render(&ctx, &InstanceSettings::new(), &WidgetChrome::default())
            .unwrap();
        assert!(html.is_empty());
    }

    #[test]
    fn test_renders_author_fields_for_download() {
        let html = widget()
            .render(
                &sample_ctx(1),
                &InstanceSettings::new(),
                &WidgetChrome::default(),
            )
            .unwrap();

        assert!(html.contains("downloadAuthor-avatar"));
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("2019-06-01"));
        assert!(html.contains("https://ada.example"));
        // No vendor extension, no store header.
        assert!(!html.contains("widget-title"));
    }

    #[test]
    fn test_vendor_mode_adds_store_header_and_links() {
        let ctx = sample_ctx(1).with_vendor(Arc::new(FakeVendor));
        let html = widget()
            .render(&ctx, &InstanceSettings::new(), &WidgetChrome::default())
            .unwrap();

        assert!(html.contains("Pixel Goods"));
        assert!(html.contains("https://shop.example/vendor/1"));
    }

    #[test]
    fn test_title_filter_applied_once() {
        let mut hooks = storefront_widgets::WidgetHooks::new();
        hooks.on_title(|t, _| format!("{t}!"));
        let ctx = sample_ctx(1).with_hooks(Arc::new(hooks));

        let html = widget()
            .render(
                &ctx,
                &instance(&[(KEY_TITLE, json!("Author"))]),
                &WidgetChrome {
                    before_title: "<h2>".to_string(),
                    after_title: "</h2>".to_string(),
                    ..WidgetChrome::default()
                },
            )
            .unwrap();
        assert!(html.contains("<h2>Author!</h2>"));
    }

    #[test]
    fn test_form_hides_store_name_without_vendor() {
        let fields = widget().form(&InstanceSettings::new(), &AdminContext::default());
        assert!(!fields
            .iter()
            .any(|f| matches!(f, FormField::Checkbox { key, .. } if *key == KEY_STORE_NAME)));

        let fields = widget().form(
            &InstanceSettings::new(),
            &AdminContext {
                vendor_active: true,
            },
        );
        assert!(fields
            .iter()
            .any(|f| matches!(f, FormField::Checkbox { key, .. } if *key == KEY_STORE_NAME)));
    }

    #[test]
    fn test_form_reflects_saved_values() {
        let fields = widget().form(
            &instance(&[(KEY_AVATAR, json!(false)), (KEY_TITLE, json!("Bio"))]),
            &AdminContext::default(),
        );

        let title = fields.iter().find_map(|f| match f {
            FormField::Text { key, value, .. } if *key == KEY_TITLE => Some(value.clone()),
            _ => None,
        });
        assert_eq!(title.as_deref(), Some("Bio"));

        let avatar = fields.iter().find_map(|f| match f {
            FormField::Checkbox { key, checked, .. } if *key == KEY_AVATAR => Some(*checked),
            _ => None,
        });
        assert_eq!(avatar, Some(false));
    }

    #[test]
    fn test_update_delegates_to_codec() {
        let persisted = widget().update(
            &instance(&[(KEY_TITLE, json!("<b>Bio</b>")), (KEY_AVATAR, json!("on"))]),
            &InstanceSettings::new(),
        );
        assert_eq!(persisted.get(KEY_TITLE), Some(&json!("Bio")));
        assert_eq!(persisted.get(KEY_AVATAR), Some(&json!(true)));
        assert_eq!(persisted.get(KEY_NAME), Some(&json!(false)));
    }
}
