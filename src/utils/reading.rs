//! Reading-time estimate shown next to posts.

use regex::Regex;
use std::sync::LazyLock;

static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Estimate reading time for an HTML (or Markdown) body.
///
/// Tags are stripped, the remainder is split on whitespace runs, and every
/// segment counts as a word. The estimate is `words / wpm + 1` rounded to the
/// nearest minute, so even an empty page reads as "1 min read".
pub fn reading_time(html: &str, words_per_minute: u32) -> String {
    let minutes = reading_minutes(html, words_per_minute);
    format!("{minutes} min read")
}

pub fn reading_minutes(html: &str, words_per_minute: u32) -> u32 {
    let text = RE_TAG.replace_all(html, "");
    let words = RE_WHITESPACE.split(&text).count();
    let wpm = words_per_minute.max(1) as f64;
    (words as f64 / wpm + 1.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_empty_body_reads_in_one_minute() {
        assert_eq!(reading_time("", 200), "1 min read");
    }

    #[test]
    fn test_four_hundred_words() {
        assert_eq!(reading_time(&words(400), 200), "3 min read");
    }

    #[test]
    fn test_rounds_to_nearest_minute() {
        // 299 / 200 + 1 = 2.495
        assert_eq!(reading_minutes(&words(299), 200), 2);
        // 300 / 200 + 1 = 2.5
        assert_eq!(reading_minutes(&words(300), 200), 3);
    }

    #[test]
    fn test_tags_are_not_words() {
        let html = format!("<p class=\"lead\">{}</p><img src=\"a.png\" alt=\"x\">", words(200));
        assert_eq!(reading_minutes(&html, 200), 2);
    }

    #[test]
    fn test_custom_speed() {
        assert_eq!(reading_minutes(&words(1000), 100), 11);
    }

    #[test]
    fn test_zero_speed_is_clamped() {
        assert_eq!(reading_minutes(&words(3), 0), 4);
    }
}
