use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;

/// Complete site configuration loaded from site.toml
#[derive(Debug, Clone)]
pub struct Site {
    pub site: SiteConfig,
    pub pages: Vec<PageDescriptor>,
}

impl Site {
    /// Replace the configured base URL (runtime override from flag or environment).
    /// Blank overrides are ignored.
    pub fn with_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.site.url = url;
        }
        self
    }
}

/// Site metadata
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Canonical base URL, with or without a trailing slash
    pub url: String,
    pub title: String,
    pub description: String,
}

/// How often a page is expected to change.
///
/// See <https://www.sitemaps.org/protocol.html#changefreqdef>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sitemap priority, always within `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Priority(f32);

impl Priority {
    pub const HIGHEST: Priority = Priority(1.0);

    pub fn new(value: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(Error::InvalidData(format!(
                "priority must be between 0.0 and 1.0, got {}",
                value
            )));
        }
        // -0.0 would otherwise render as "-0.0"
        Ok(Priority(value + 0.0))
    }
}

/// Renders with at least one decimal place: `1.0`, `0.5`, `0.85`
impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plain = self.0.to_string();
        if plain.contains('.') {
            f.write_str(&plain)
        } else {
            write!(f, "{:.1}", self.0)
        }
    }
}

/// A page listed in the sitemap
#[derive(Debug, Clone, PartialEq)]
pub struct PageDescriptor {
    /// Site-relative path, always starting with `/`
    pub path: String,
    pub change_frequency: ChangeFrequency,
    pub priority: Priority,
}

impl PageDescriptor {
    /// The site root, refreshed weekly at top priority
    pub fn root() -> Self {
        PageDescriptor {
            path: "/".to_string(),
            change_frequency: ChangeFrequency::Weekly,
            priority: Priority::HIGHEST,
        }
    }
}

/// Page list used when site.toml does not declare any pages
pub fn default_pages() -> Vec<PageDescriptor> {
    vec![PageDescriptor::root()]
}
