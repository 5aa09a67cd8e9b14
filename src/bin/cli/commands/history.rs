use anyhow::Result;

use motivation_lib::storage::HistoryEntry;

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(app: &App, limit: Option<usize>, format: &OutputFormat, use_color: bool) -> Result<()> {
    let history = app.history()?;
    let entries = most_recent(&history, limit);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(entries)?);
        }
        OutputFormat::Plain => {
            if entries.is_empty() {
                println!("No history yet.");
                return Ok(());
            }

            for (i, entry) in entries.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("{}", terminal::render_history_entry(entry, use_color));
            }
        }
    }

    Ok(())
}

/// The last `limit` entries; `None` or 0 means all of them
fn most_recent(history: &[HistoryEntry], limit: Option<usize>) -> &[HistoryEntry] {
    match limit {
        Some(n) if n > 0 => &history[history.len().saturating_sub(n)..],
        _ => history,
    }
}
