use super::load_site;
use std::path::PathBuf;

pub async fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating site at: {}", path.display());

    let site = load_site(&path, None)?;

    println!("✓ site.toml valid");
    println!("  Site: {}", site.site.title);
    println!("  URL: {}", site.site.url);
    println!("  Pages: {}", site.pages.len());
    for page in &site.pages {
        println!(
            "    {} ({}, priority {})",
            page.path, page.change_frequency, page.priority
        );
    }

    Ok(())
}
