use serde::Deserialize;

/// Root theme configuration. Loaded from environment variables
/// with the prefix `STOREFRONT__`.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_site_name")]
    pub site_name: String,
    #[serde(default)]
    pub author_widget: AuthorWidgetConfig,
}

/// Global presentation settings for the author-info widget.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorWidgetConfig {
    /// Avatar size in pixels requested from the host avatar service.
    #[serde(default = "default_avatar_size")]
    pub avatar_size: u32,
    /// strftime-style date format used by the site locale formatter.
    /// The widget core never reads this directly.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

// Default functions
fn default_site_name() -> String {
    "storefront".to_string()
}
fn default_avatar_size() -> u32 {
    96
}
fn default_date_format() -> String {
    "%B %e, %Y".to_string()
}

impl Default for AuthorWidgetConfig {
    fn default() -> Self {
        Self {
            avatar_size: default_avatar_size(),
            date_format: default_date_format(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            site_name: default_site_name(),
            author_widget: AuthorWidgetConfig::default(),
        }
    }
}

impl ThemeConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("STOREFRONT")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
