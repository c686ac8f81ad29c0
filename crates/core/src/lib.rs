pub mod config;
pub mod error;
pub mod sitemap;
pub mod types;

pub use config::parse_site_toml;
pub use error::{Error, Result};
pub use sitemap::{SITEMAP_CONTENT_TYPE, render_sitemap};
pub use types::*;
