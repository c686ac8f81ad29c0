use crate::error::{Error, Result};
use crate::types::*;
use serde::Deserialize;
use std::fs;
use std::path::{Component, Path};

/// Priority the sitemap protocol assumes when a page does not set one
const DEFAULT_PAGE_PRIORITY: f32 = 0.5;

/// Raw TOML configuration structure, as written in site.toml
#[derive(Debug, Deserialize)]
struct RawConfig {
    site: RawSiteConfig,
    #[serde(default)]
    page: Vec<RawPage>,
}

#[derive(Debug, Deserialize)]
struct RawSiteConfig {
    url: String,
    title: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct RawPage {
    path: String,
    changefreq: Option<ChangeFrequency>,
    priority: Option<f32>,
}

/// Parse site.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<Site> {
    let content = fs::read_to_string(path)?;
    parse_site_toml_str(&content)
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<Site> {
    let raw: RawConfig = toml::from_str(content)?;

    let site = SiteConfig {
        url: raw.site.url,
        title: raw.site.title,
        description: raw.site.description,
    };

    if raw.page.is_empty() {
        return Ok(Site {
            site,
            pages: default_pages(),
        });
    }

    let pages: Result<Vec<PageDescriptor>> = raw
        .page
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            let field = format!("page[{}]", i);
            validate_page_path(&p.path, &field)?;

            let priority = Priority::new(p.priority.unwrap_or(DEFAULT_PAGE_PRIORITY))
                .map_err(|e| Error::ConfigParse(format!("{}.priority: {}", field, e)))?;

            Ok(PageDescriptor {
                path: p.path,
                change_frequency: p.changefreq.unwrap_or(ChangeFrequency::Weekly),
                priority,
            })
        })
        .collect();

    Ok(Site {
        site,
        pages: pages?,
    })
}

/// Validate a site-relative page path.
///
/// Paths must start with `/` and must not contain `..` segments, so every
/// sitemap location stays under the configured base URL.
fn validate_page_path(path_str: &str, field_name: &str) -> Result<()> {
    if path_str.trim().is_empty() {
        return Err(Error::ConfigParse(format!(
            "Empty path in '{}' field",
            field_name
        )));
    }

    if !path_str.starts_with('/') {
        return Err(Error::ConfigParse(format!(
            "Page path in '{}' must start with '/': '{}'",
            field_name, path_str
        )));
    }

    if Path::new(path_str)
        .components()
        .any(|c| c == Component::ParentDir)
    {
        return Err(Error::ConfigParse(format!(
            "Parent directory references (..) not allowed in '{}': '{}'",
            field_name, path_str
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MINIMAL: &str = r##"
[site]
url = "https://ouru.app/"
title = "Ouru Text to PDF"
description = "Convert Ouru text to polished PDF or Word."
"##;

    #[test]
    fn test_parse_minimal_config() {
        let site = parse_site_toml_str(MINIMAL).unwrap();
        assert_eq!(site.site.url, "https://ouru.app/");
        assert_eq!(site.site.title, "Ouru Text to PDF");
        assert_eq!(site.pages, default_pages());
    }

    #[test]
    fn test_parse_description_optional() {
        let toml = r##"
[site]
url = "https://ouru.app"
title = "Ouru"
"##;
        let site = parse_site_toml_str(toml).unwrap();
        assert!(site.site.description.is_empty());
    }

    #[test]
    fn test_parse_missing_url() {
        let toml = r##"
[site]
title = "Ouru"
"##;
        let result = parse_site_toml_str(toml);
        assert!(matches!(result, Err(Error::ConfigParse(_))));
    }

    #[test]
    fn test_parse_pages() {
        let toml = r##"
[site]
url = "https://ouru.app"
title = "Ouru"

[[page]]
path = "/"
changefreq = "daily"
priority = 1.0

[[page]]
path = "/pricing"
"##;
        let site = parse_site_toml_str(toml).unwrap();
        assert_eq!(site.pages.len(), 2);
        assert_eq!(site.pages[0].change_frequency, ChangeFrequency::Daily);
        assert_eq!(site.pages[0].priority.to_string(), "1.0");
        assert_eq!(site.pages[1].path, "/pricing");
        assert_eq!(site.pages[1].change_frequency, ChangeFrequency::Weekly);
        assert_eq!(site.pages[1].priority.to_string(), "0.5");
    }

    #[test]
    fn test_parse_rejects_unknown_changefreq() {
        let toml = r##"
[site]
url = "https://ouru.app"
title = "Ouru"

[[page]]
path = "/"
changefreq = "fortnightly"
"##;
        assert!(parse_site_toml_str(toml).is_err());
    }

    #[test]
    fn test_parse_rejects_priority_out_of_range() {
        let toml = r##"
[site]
url = "https://ouru.app"
title = "Ouru"

[[page]]
path = "/"
priority = 2.0
"##;
        let err = parse_site_toml_str(toml).unwrap_err().to_string();
        assert!(err.contains("page[0].priority"));
    }

    #[test]
    fn test_validate_page_path() {
        assert!(validate_page_path("/", "page").is_ok());
        assert!(validate_page_path("/docs/getting-started", "page").is_ok());

        let err = validate_page_path("docs", "page[1]").unwrap_err().to_string();
        assert!(err.contains("must start with '/'"));
        assert!(err.contains("page[1]"));

        let err = validate_page_path("/docs/../../etc", "page").unwrap_err().to_string();
        assert!(err.contains("Parent directory references"));

        let err = validate_page_path("  ", "page").unwrap_err().to_string();
        assert!(err.contains("Empty path"));
    }

    #[test]
    fn test_parse_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, MINIMAL).unwrap();

        let site = parse_site_toml(&path).unwrap();
        assert_eq!(site.site.url, "https://ouru.app/");
    }

    #[test]
    fn test_parse_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = parse_site_toml(dir.path().join("site.toml"));
        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
