use anyhow::{bail, Context, Result};

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

/// Add the most recently viewed quote to favorites
pub fn run_add(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let Some(quote) = app.current_quote()? else {
        bail!("No quote viewed yet. Run `motivation-cli quote` first.");
    };

    let added = app
        .storage
        .add_favorite(&quote)
        .context("Failed to add favorite")?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "added": added,
                "quote": quote,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{}", terminal::render_quote(&quote, use_color));
            if added {
                println!("\nQuote added to favorites!");
            } else {
                println!("\nQuote is already in favorites.");
            }
        }
    }

    Ok(())
}

pub fn run_list(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let favorites = app.favorites()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&favorites)?);
        }
        OutputFormat::Plain => {
            terminal::print_quotes(&favorites, "No favorites yet.", use_color);
        }
    }

    Ok(())
}
