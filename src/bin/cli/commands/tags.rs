use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let tags = app.catalog.tags();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(tags)?);
        }
        OutputFormat::Plain => {
            if tags.is_empty() {
                println!("No tags found.");
                return Ok(());
            }

            for tag in tags {
                let count = app.catalog.quotes().iter().filter(|q| q.has_tag(tag)).count();
                println!("#{:<20} {}", tag, count);
            }

            println!("\n{} tags total", tags.len());
        }
    }

    Ok(())
}
