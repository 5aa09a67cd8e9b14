use motivation_lib::quotes::Quote;
use motivation_lib::storage::HistoryEntry;

/// ANSI color codes
pub mod color {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const ITALIC: &str = "\x1b[3m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

fn paint(text: &str, code: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", code, text, color::RESET)
    } else {
        text.to_string()
    }
}

/// Two-line quote block: `"<content>"` then `- <author>`
pub fn render_quote(quote: &Quote, use_color: bool) -> String {
    let content = paint(&format!("\"{}\"", quote.content), color::ITALIC, use_color);
    let author = paint(&format!("- {}", quote.author), color::CYAN, use_color);
    format!("{}\n{}", content, author)
}

/// Quote block prefixed with its `[YYYY-MM-DD HH:MM]` view time
pub fn render_history_entry(entry: &HistoryEntry, use_color: bool) -> String {
    let stamp = paint(&format!("[{}]", entry.display_time()), color::GRAY, use_color);
    format!("{}\n{}", stamp, render_quote(&entry.quote, use_color))
}

/// Tags as `#tag` words
pub fn render_tags(quote: &Quote, use_color: bool) -> String {
    let tags = quote
        .tags
        .iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ");
    paint(&tags, color::DIM, use_color)
}

/// Print quotes separated by blank lines, or a fallback message when empty
pub fn print_quotes<'a>(quotes: impl IntoIterator<Item = &'a Quote>, empty: &str, use_color: bool) {
    let mut any = false;
    for quote in quotes {
        if any {
            println!();
        }
        println!("{}", render_quote(quote, use_color));
        any = true;
    }
    if !any {
        println!("{}", empty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_quote_plain() {
        let quote = Quote::new("Hi", "Z", ["life"]);
        assert_eq!(render_quote(&quote, false), "\"Hi\"\n- Z");
    }

    #[test]
    fn test_render_tags_plain() {
        let quote = Quote::new("Hi", "Z", ["work", "life"]);
        assert_eq!(render_tags(&quote, false), "#life #work");
    }

    #[test]
    fn test_color_wraps_text() {
        let quote = Quote::new("Hi", "Z", ["life"]);
        let rendered = render_quote(&quote, true);
        assert!(rendered.starts_with(color::ITALIC));
        assert!(rendered.contains(&format!("{}- Z{}", color::CYAN, color::RESET)));
        assert!(!render_quote(&quote, false).contains('\x1b'));
    }
}
