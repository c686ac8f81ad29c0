mod commands;
mod server;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io;
use std::net::IpAddr;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ouru-site")]
#[command(version, about = "Site configuration and sitemap server for Ouru", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Initialize a site directory with a starter site.toml
    Init {
        /// Path to the site directory
        path: PathBuf,

        /// Public base URL of the site
        #[arg(long)]
        url: Option<String>,

        /// Site title
        #[arg(long)]
        title: Option<String>,
    },

    /// Validate site configuration
    Validate {
        /// Path to the site directory
        path: PathBuf,
    },

    /// Serve sitemap.xml over HTTP
    Serve {
        /// Path to the site directory
        path: PathBuf,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,

        /// Port to serve on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Override the base URL from site.toml
        #[arg(long, env = "OURU_SITE_URL")]
        site_url: Option<String>,
    },

    /// Prerender sitemap.xml into an output directory
    Build {
        /// Path to the site directory
        path: PathBuf,

        /// Output directory for generated files
        #[arg(short, long)]
        output: PathBuf,

        /// Override the base URL from site.toml
        #[arg(long, env = "OURU_SITE_URL")]
        site_url: Option<String>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ouru_site=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Command::Init { path, url, title } => commands::init::run(path, url, title).await,
        Command::Validate { path } => commands::validate::run(path).await,
        Command::Serve {
            path,
            host,
            port,
            site_url,
        } => commands::serve::run(path, host, port, site_url).await,
        Command::Build {
            path,
            output,
            site_url,
        } => commands::build::run(path, output, site_url).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "ouru-site", &mut io::stdout());
            Ok(())
        }
    }
}
