//! Storefront Express: download-storefront presentation layer.
//!
//! Demo entry point: registers the author-info widget, saves a sample
//! configuration, and renders the download sidebar with and without the
//! vendor marketplace extension.

mod demo;

use clap::Parser;
use serde_json::json;
use std::sync::Arc;
use storefront_author_widget::{AuthorInfoWidget, WIDGET_ID};
use storefront_core::config::ThemeConfig;
use storefront_core::types::ContentItem;
use storefront_widgets::{
    InstanceSettings, InstanceStore, RenderContext, Sidebar, WidgetChrome, WidgetRegistry,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "storefront-express")]
#[command(about = "Download-storefront presentation layer demo")]
#[command(version)]
struct Cli {
    /// Author whose details the sidebar renders
    #[arg(long, default_value_t = 1)]
    author_id: u64,

    /// Avatar size in pixels (overrides config)
    #[arg(long, env = "STOREFRONT__AUTHOR_WIDGET__AVATAR_SIZE")]
    avatar_size: Option<u32>,

    /// Widget title saved into the demo instance
    #[arg(long, default_value = "About the author")]
    title: String,

    /// Render without the vendor marketplace extension
    #[arg(long, default_value_t = false)]
    no_vendor: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing; logs go to stderr so stdout stays pure markup.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront_express=info,storefront_widgets=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!("Storefront Express starting up");

    // Load configuration
    let mut config = ThemeConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        ThemeConfig::default()
    });

    // Apply CLI overrides
    if let Some(size) = cli.avatar_size {
        config.author_widget.avatar_size = size;
    }

    info!(
        site = %config.site_name,
        avatar_size = config.author_widget.avatar_size,
        "Configuration loaded"
    );

    // Register widgets and save a demo instance configuration.
    let registry = WidgetRegistry::new();
    registry.register(Arc::new(AuthorInfoWidget::new(&config.author_widget)));

    let store = InstanceStore::new();
    let instance_id = store.create();

    let mut submission = InstanceSettings::new();
    submission.insert("title".to_string(), json!(cli.title));
    submission.insert("avatar".to_string(), json!("on"));
    submission.insert("store_name".to_string(), json!("on"));
    submission.insert("name".to_string(), json!("on"));
    submission.insert("signup_date".to_string(), json!("on"));
    submission.insert("website".to_string(), json!("on"));
    store.save(&registry, WIDGET_ID, instance_id, &submission)?;

    let mut sidebar = Sidebar::new(
        "download-sidebar",
        WidgetChrome {
            before_widget: "<section class=\"widget downloadAuthor\">".to_string(),
            after_widget: "</section>".to_string(),
            before_title: "<h2 class=\"widget-title\">".to_string(),
            after_title: "</h2>".to_string(),
        },
    );
    sidebar.place(WIDGET_ID, instance_id);

    let ctx = RenderContext::new(
        ContentItem::download(cli.author_id),
        Arc::new(demo::DemoDirectory::seeded()),
        Arc::new(demo::DemoAvatars),
        Arc::new(demo::SiteLocale::new(&config.author_widget)),
    );
    let ctx = if cli.no_vendor {
        ctx
    } else {
        ctx.with_vendor(Arc::new(demo::DemoVendor))
    };

    let html = sidebar.render(&ctx, &registry, &store)?;
    println!("{html}");

    info!(bytes = html.len(), "sidebar rendered");
    Ok(())
}
