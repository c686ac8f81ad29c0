use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tracing::info;

use super::load_site;
use crate::server::{AppState, create_router};

/// Serve the site's dynamic routes.
///
/// Loads site.toml once, applies the runtime URL override, and answers
/// `GET /sitemap.xml` until Ctrl+C.
///
/// # Arguments
///
/// * `path` - Path to site directory containing site.toml
/// * `host` - Address to bind (default: 127.0.0.1)
/// * `port` - Port to serve on (default: 3000)
/// * `site_url` - Base URL override (`--site-url` or `OURU_SITE_URL`)
pub async fn run(path: PathBuf, host: IpAddr, port: u16, site_url: Option<String>) -> Result<()> {
    println!("🌐 Starting site server...");
    println!("   Site: {}", path.display());

    let site = load_site(&path, site_url)?;

    println!("   ✓ Loaded: {}", site.site.title);
    println!("   ✓ Base URL: {}", site.site.url);
    println!("   ✓ Sitemap pages: {}", site.pages.len());

    let app = create_router(AppState::new(site));

    let addr = SocketAddr::new(host, port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Listening on http://{}", addr);
    println!("\n🚀 Sitemap at: http://{}/sitemap.xml", addr);
    println!("   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        return;
    }
    info!("Shutting down gracefully...");
}
