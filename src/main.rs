use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::info;

use mod_info::config::{AppConfig, log_path};
use mod_info::release::assets::InstallerAssets;
use mod_info::release::cache::ReleaseCache;
use mod_info::release::client::GitHubReleaseClient;
use mod_info::release::service::LatestReleaseService;
use mod_info::repository::clients::HttpModSiteClient;
use mod_info::repository::dispatch::ModRepositories;
use mod_info::repository::repositories::ContentSiteRepository;

#[derive(Parser)]
#[command(name = "mod-info")]
#[command(version, about = "Look up mod metadata and the latest release downloads")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch metadata about a mod from a mod site
    Mod {
        /// Vendor key of the mod site (e.g. Chucklefish)
        vendor: String,
        /// Mod ID on that site
        id: String,
    },
    /// Show the download links of the latest release
    Release,
}

fn build_repositories(config: &AppConfig) -> anyhow::Result<ModRepositories> {
    let mut repositories = ModRepositories::new();
    let content_site = &config.repositories.content_site;
    if content_site.enabled {
        let client = HttpModSiteClient::new(&content_site.base_url)?;
        repositories.register(Box::new(ContentSiteRepository::new(
            content_site.vendor_key.clone(),
            Box::new(client),
        )));
    }
    Ok(repositories)
}

fn build_release_service(config: &AppConfig) -> anyhow::Result<LatestReleaseService> {
    let release = &config.release;
    let api = GitHubReleaseClient::new(&release.base_url)?;
    let cache = ReleaseCache::new(
        Arc::new(api),
        Duration::from_secs(config.cache.release_ttl_secs),
    );
    let assets = InstallerAssets::new(&release.product_name, release.fallback_url.clone())?;
    Ok(LatestReleaseService::new(
        cache,
        assets,
        release.repository.clone(),
    ))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    match cli.command {
        Command::Mod { vendor, id } => {
            let repositories = build_repositories(&config)?;
            let model = repositories.get_mod_info(&vendor, &id).await;
            println!("{}", serde_json::to_string_pretty(&model)?);
        }
        Command::Release => {
            let service = build_release_service(&config)?;
            info!("Looking up latest release of {}", service.repository());
            let summary = service.latest().await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = mod_info::logging::init(&log_path())?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}
