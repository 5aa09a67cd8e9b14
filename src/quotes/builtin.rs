//! Built-in quote database

use super::models::Quote;

const BUILTIN_QUOTES: &[(&str, &str, &[&str])] = &[
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
        &["work", "passion"],
    ),
    (
        "Life is what happens when you're busy making other plans.",
        "John Lennon",
        &["life"],
    ),
    (
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
        &["dreams", "future"],
    ),
    (
        "It does not matter how slowly you go as long as you do not stop.",
        "Confucius",
        &["perseverance"],
    ),
    (
        "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        "Winston Churchill",
        &["success", "courage", "perseverance"],
    ),
    (
        "Believe you can and you're halfway there.",
        "Theodore Roosevelt",
        &["confidence"],
    ),
    (
        "In the middle of every difficulty lies opportunity.",
        "Albert Einstein",
        &["opportunity", "life"],
    ),
    (
        "The best time to plant a tree was 20 years ago. The second best time is now.",
        "Chinese Proverb",
        &["action", "future"],
    ),
    (
        "You miss 100% of the shots you don't take.",
        "Wayne Gretzky",
        &["action", "courage"],
    ),
    (
        "Whether you think you can or you think you can't, you're right.",
        "Henry Ford",
        &["confidence", "mindset"],
    ),
    (
        "The secret of getting ahead is getting started.",
        "Mark Twain",
        &["action", "success"],
    ),
    (
        "Quality is not an act, it is a habit.",
        "Aristotle",
        &["work", "habits"],
    ),
    (
        "Where there is love there is life.",
        "Mahatma Gandhi",
        &["love", "life"],
    ),
    (
        "Love all, trust a few, do wrong to none.",
        "William Shakespeare",
        &["love", "wisdom"],
    ),
    (
        "Knowing yourself is the beginning of all wisdom.",
        "Aristotle",
        &["wisdom"],
    ),
    (
        "Do what you can, with what you have, where you are.",
        "Theodore Roosevelt",
        &["action"],
    ),
    (
        "Happiness is not something ready made. It comes from your own actions.",
        "Dalai Lama",
        &["happiness", "action"],
    ),
    (
        "Our greatest glory is not in never falling, but in rising every time we fall.",
        "Confucius",
        &["perseverance", "courage"],
    ),
    (
        "Choose a job you love, and you will never have to work a day in your life.",
        "Confucius",
        &["work", "love"],
    ),
    (
        "What you do today can improve all your tomorrows.",
        "Ralph Marston",
        &["future", "mindset"],
    ),
];

/// Materialize the built-in database as owned quotes
pub(crate) fn builtin_quotes() -> Vec<Quote> {
    BUILTIN_QUOTES
        .iter()
        .map(|(content, author, tags)| Quote::new(*content, *author, tags.iter().copied()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_quote_is_tagged() {
        let quotes = builtin_quotes();
        assert!(!quotes.is_empty());
        for quote in &quotes {
            assert!(!quote.tags.is_empty(), "untagged quote: {}", quote.content);
            assert!(!quote.author.is_empty());
        }
    }
}
