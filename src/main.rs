//! CLI entry point for hashblog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hashblog::config::SiteConfig;
use hashblog::content::PostSummary;
use hashblog::fetch::{Fetch, SiteFetcher};
use hashblog::surface::MemorySurface;
use hashblog::Blog;

#[derive(Parser)]
#[command(name = "hashblog")]
#[command(version)]
#[command(about = "View a hash-routed static blog from a directory or a URL", long_about = None)]
struct Cli {
    /// Site directory (defaults to current directory)
    #[arg(short, long, global = true, conflicts_with = "url")]
    site: Option<PathBuf>,

    /// Base URL of a served site
    #[arg(short, long, global = true)]
    url: Option<String>,

    /// Config file (defaults to _config.yml in the site directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the page a hash leads to
    #[command(alias = "v")]
    View {
        /// URL hash, e.g. "#about" or "#post/hello.md"
        #[arg(default_value = "")]
        hash: String,

        /// Print the whole document instead of the visible section
        #[arg(short, long)]
        full: bool,
    },

    /// Read hashes from stdin, one per line, rendering each in the same session
    Browse,

    /// List the post index
    List,

    /// Display version information
    Version,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for rendered output
    let filter = if cli.debug {
        "hashblog=debug,info"
    } else {
        "hashblog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::View { ref hash, full } => {
            let mut router = open_site(&cli)?.router(MemorySurface::new());
            router.boot(hash).await;
            let surface = router.into_surface();
            if full {
                print!("{}", surface.to_html());
            } else {
                println!("{}", surface.active_content().unwrap_or_default());
            }
        }

        Commands::Browse => {
            let mut router = open_site(&cli)?.router(MemorySurface::new());
            let route = router.boot("").await.clone();
            print_section(&route.to_string(), router.surface());

            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                let route = router.navigate(line.trim()).await.clone();
                print_section(&route.to_string(), router.surface());
            }
        }

        Commands::List => list_posts(&open_site(&cli)?).await?,

        Commands::Version => {
            println!("hashblog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Open the site named on the command line
fn open_site(cli: &Cli) -> Result<Blog<SiteFetcher>> {
    let config = cli.config.as_ref().map(SiteConfig::load).transpose()?;

    if let Some(url) = &cli.url {
        tracing::info!("Viewing site at {}", url);
        return Ok(Blog::open_url(url, config));
    }

    let dir = match &cli.site {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    tracing::info!("Viewing site in {:?}", dir);
    Blog::open_dir(&dir, config)
}

fn print_section(route: &str, surface: &MemorySurface) {
    println!("<!-- {} -->", route);
    println!("{}", surface.active_content().unwrap_or_default());
}

async fn list_posts(blog: &Blog<SiteFetcher>) -> Result<()> {
    let posts: Vec<PostSummary> = blog.fetcher.fetch_json(&blog.config.index_path()).await?;
    println!("Posts ({}):", posts.len());
    for post in posts {
        println!("  {} - {} [{}]", post.date, post.title, post.file);
    }
    Ok(())
}
