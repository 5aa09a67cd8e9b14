use std::path::Path;

use anyhow::{Context, Result};

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, path: &Path, format: &OutputFormat) -> Result<()> {
    let count = app
        .storage
        .export_favorites(path)
        .with_context(|| format!("Failed to export favorites to {}", path.display()))?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": path.to_string_lossy(),
                "exported": count,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Exported {} favorites to {}", count, path.display());
        }
    }

    Ok(())
}
