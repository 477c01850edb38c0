use clap::{Parser, Subcommand};

use creatorscope_core::{load_app_config, ContentItem, Platform};
use creatorscope_platforms::{extract_id, PlatformClient};

#[derive(Debug, Parser)]
#[command(name = "creatorscope")]
#[command(about = "Creator content metrics from pasted platform URLs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract the platform-native content ID from a URL
    Extract {
        url: String,
        #[arg(short, long)]
        platform: String,
    },
    /// Fetch normalized metrics for one URL on one platform
    Views {
        url: String,
        #[arg(short, long)]
        platform: String,
    },
    /// Fetch metrics for one URL across several platforms
    Item {
        url: String,
        #[arg(short, long, value_delimiter = ',')]
        platforms: Vec<String>,
    },
    /// Aggregate one platform's metrics across many URLs
    Aggregate {
        #[arg(short, long)]
        platform: String,
        urls: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Extract { url, platform } => {
            let platform: Platform = platform.parse()?;
            match extract_id(&url, platform) {
                Some(id) => println!("{id}"),
                None => anyhow::bail!("no {platform} content ID found in \"{url}\""),
            }
        }
        Commands::Views { url, platform } => {
            let platform: Platform = platform.parse()?;
            let config = load_app_config()?;
            let client = PlatformClient::new(&config)?;
            let item = ContentItem::new(url, platform.as_str());
            let response = client.fetch_platform_views(&item, platform).await;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Item { url, platforms } => {
            let config = load_app_config()?;
            let client = PlatformClient::new(&config)?;
            let item = ContentItem {
                original_url: url,
                platforms,
                title: None,
            };
            let rows = client.fetch_all_platform_views(&item).await;
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        Commands::Aggregate { platform, urls } => {
            let platform: Platform = platform.parse()?;
            let config = load_app_config()?;
            let client = PlatformClient::new(&config)?;
            let items: Vec<ContentItem> = urls
                .into_iter()
                .map(|url| ContentItem::new(url, platform.as_str()))
                .collect();
            let aggregated = client.fetch_aggregated_data(&items, platform).await;
            println!("{}", serde_json::to_string_pretty(&aggregated)?);
        }
    }

    Ok(())
}
