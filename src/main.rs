mod application;
mod config;
mod gitlab;
mod models;
mod report;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use application::services::{rank_by_repository_size, FetchService, TOP_N};
use config::Settings;
use gitlab::GitLabClient;
use report::{render_table, write_report, OUTPUT_FILE};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env().context("Invalid configuration")?;

    let client = GitLabClient::new(&settings.gitlab_url, settings.private_token.clone())
        .context("Failed to create GitLab client")?;
    info!("GitLab API: {}", client.api_base());
    let fetcher = FetchService::new(Arc::new(client));

    let all_metadata = fetcher.fetch_all().await?;
    info!("Collected {} non-forked projects", all_metadata.len());

    let top = rank_by_repository_size(all_metadata, TOP_N);

    info!("top {}:", TOP_N);
    for project in &top {
        println!("{}", project);
    }

    let today = chrono::Local::now().date_naive();
    let html_table = render_table(&top, today);
    write_report(OUTPUT_FILE, &html_table).await?;
    info!("Report written to {}", OUTPUT_FILE);

    Ok(())
}
