use anyhow::{Context, Result};
use chrono::Utc;
use ouru_site_core::render_sitemap;
use std::fs;
use std::path::PathBuf;

use super::load_site;

/// Prerender sitemap.xml for static hosting
pub async fn run(path: PathBuf, output: PathBuf, site_url: Option<String>) -> Result<()> {
    println!("🔨 Prerendering sitemap...");
    println!("   Source: {}", path.display());
    println!("   Output: {}", output.display());
    println!();

    let site = load_site(&path, site_url)?;

    println!("✓ Loaded: {}", site.site.title);
    println!("  Base URL: {}", site.site.url);
    println!("  Pages: {}", site.pages.len());
    println!();

    fs::create_dir_all(&output).context("Failed to create output directory")?;

    let xml = render_sitemap(&site.site.url, &site.pages, Utc::now());
    let sitemap_path = output.join("sitemap.xml");
    fs::write(&sitemap_path, xml)
        .with_context(|| format!("Failed to write {}", sitemap_path.display()))?;

    println!("✅ Build complete!");
    println!("   Wrote: {}", sitemap_path.display());
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::SITE_TOML;
    use tempfile::TempDir;

    fn write_site(dir: &TempDir) {
        fs::write(
            dir.path().join(SITE_TOML),
            "[site]\nurl = \"https://ouru.app/\"\ntitle = \"Ouru\"\n",
        )
        .unwrap();
    }

    #[tokio::test]
    async fn test_build_writes_sitemap() {
        let dir = TempDir::new().unwrap();
        write_site(&dir);
        let output = dir.path().join("dist");

        run(dir.path().to_path_buf(), output.clone(), None)
            .await
            .unwrap();

        let xml = fs::read_to_string(output.join("sitemap.xml")).unwrap();
        assert!(xml.contains("<loc>https://ouru.app/</loc>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
    }

    #[tokio::test]
    async fn test_build_honors_url_override() {
        let dir = TempDir::new().unwrap();
        write_site(&dir);
        let output = dir.path().join("dist");

        run(
            dir.path().to_path_buf(),
            output.clone(),
            Some("https://staging.ouru.app".to_string()),
        )
        .await
        .unwrap();

        let xml = fs::read_to_string(output.join("sitemap.xml")).unwrap();
        assert!(xml.contains("<loc>https://staging.ouru.app/</loc>"));
    }

    #[tokio::test]
    async fn test_build_requires_site_toml() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path().to_path_buf(), dir.path().join("dist"), None).await;
        assert!(result.is_err());
        assert!(!dir.path().join("dist").exists());
    }
}
