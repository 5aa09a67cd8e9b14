use anyhow::{bail, Result};

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(app: &App, tag: Option<&str>, format: &OutputFormat, use_color: bool) -> Result<()> {
    let Some(entry) = app.next_quote(tag)? else {
        match tag.filter(|t| !t.is_empty()) {
            Some(tag) => bail!("No quote available for tag '{}'", tag),
            None => bail!("No quote available"),
        }
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        OutputFormat::Plain => {
            println!("{}", terminal::render_quote(&entry.quote, use_color));
            println!("{}", terminal::render_tags(&entry.quote, use_color));
        }
    }

    Ok(())
}
