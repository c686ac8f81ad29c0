pub mod build;
pub mod init;
pub mod serve;
pub mod validate;

use anyhow::{Context, Result};
use ouru_site_core::{Site, parse_site_toml};
use std::path::Path;

pub const SITE_TOML: &str = "site.toml";

/// Load site.toml from a site directory and apply the runtime URL override.
pub fn load_site(path: &Path, site_url: Option<String>) -> Result<Site> {
    if !path.exists() {
        anyhow::bail!(
            "Site directory does not exist: {}\nRun 'ouru-site init {}' first",
            path.display(),
            path.display()
        );
    }

    let site_toml_path = path.join(SITE_TOML);
    if !site_toml_path.exists() {
        anyhow::bail!(
            "site.toml not found in {}\nRun 'ouru-site init {}' first",
            path.display(),
            path.display()
        );
    }

    let site = parse_site_toml(&site_toml_path).context("Failed to parse site.toml")?;

    Ok(site.with_url_override(site_url))
}
