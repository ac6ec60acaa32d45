pub mod html_table;

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

pub use html_table::render_table;

/// Where the report lands, relative to the working directory.
pub const OUTPUT_FILE: &str = "gitlab-ranking-list.html";

/// Overwrite `path` with the rendered table followed by a newline.
pub async fn write_report(path: impl AsRef<Path>, html_table: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, format!("{}\n", html_table))
        .await
        .with_context(|| format!("Failed to write report to {}", path.display()))
}
