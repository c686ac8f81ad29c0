use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::SITE_TOML;

const DEFAULT_URL: &str = "https://example.com/";
const DEFAULT_TITLE: &str = "My Site";

/// Escape a string for safe inclusion in a TOML basic string.
///
/// The template carries comments, so it is assembled by hand rather than
/// serialized with the toml crate.
///
/// See: https://toml.io/en/v1.0.0#string
fn toml_escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\x08', "\\b")
        .replace('\x0C', "\\f")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// A base URL must parse, use http or https, and carry a host
fn validate_site_url(url_str: &str) -> Result<()> {
    let parsed =
        url::Url::parse(url_str).with_context(|| format!("Invalid site URL: '{}'", url_str))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        anyhow::bail!(
            "Invalid site URL: '{}' (scheme '{}' not supported, must be http or https)",
            url_str,
            parsed.scheme()
        );
    }

    if parsed.host_str().is_none() {
        anyhow::bail!("Invalid site URL: '{}' (URL must have a valid host)", url_str);
    }

    Ok(())
}

/// Initialize a site directory with a starter site.toml.
///
/// # Errors
///
/// Returns an error if:
/// - The directory doesn't exist
/// - site.toml already exists in the directory
/// - The URL is not an absolute http(s) URL
pub async fn run(path: PathBuf, url: Option<String>, title: Option<String>) -> Result<()> {
    println!("Initializing site directory: {}", path.display());

    if !path.exists() {
        anyhow::bail!(
            "Directory '{}' does not exist. Create it first: mkdir {}",
            path.display(),
            path.display()
        );
    }

    let site_toml_path = path.join(SITE_TOML);
    if site_toml_path.exists() {
        anyhow::bail!(
            "site.toml already exists at {}\nHint: Delete it first or use a different directory",
            site_toml_path.display()
        );
    }

    generate_site_toml(&path, url.as_deref(), title.as_deref())?;

    println!("\n✓ Initialization complete!");
    println!("\nNext steps:");
    println!("  1. Edit site.toml (set url, title, description)");
    println!("  2. Validate: ouru-site validate {}", path.display());
    println!("  3. Serve: ouru-site serve {}", path.display());

    Ok(())
}

fn generate_site_toml(base: &Path, url: Option<&str>, title: Option<&str>) -> Result<()> {
    if let Some(u) = url {
        validate_site_url(u)?;
    }

    let site_url = toml_escape_string(url.unwrap_or(DEFAULT_URL));
    let site_title = toml_escape_string(title.unwrap_or(DEFAULT_TITLE));

    let url_comment = if url.is_some() {
        ""
    } else {
        "  # TODO: Set the public site URL"
    };
    let title_comment = if title.is_some() {
        ""
    } else {
        "  # TODO: Set the site title"
    };

    let toml = format!(
        r##"# Generated by ouru-site init

[site]
url = "{site_url}"{url_comment}
title = "{site_title}"{title_comment}
description = ""

# Pages listed in sitemap.xml. Without any [[page]] entries the sitemap
# lists the site root (weekly, priority 1.0).
# [[page]]
# path = "/"
# changefreq = "weekly"  # always | hourly | daily | weekly | monthly | yearly | never
# priority = 1.0
"##
    );

    ouru_site_core::config::parse_site_toml_str(&toml)
        .context("Generated site.toml is invalid - this is a bug in the template generator")?;

    fs::write(base.join(SITE_TOML), toml)?;

    Ok(())
}
