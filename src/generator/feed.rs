//! Feed assembly: which entries go into the syndication feed, and in what order.
//!
//! The feed is filtered with [`should_render`], not `should_list`, so
//! archived entries stay in it while disappearing from index pages.

use crate::{
    content::{ContentEntry, RuntimeMode, should_render},
    utils::date::DateTimeUtc,
};

/// One feed entry, projected from a [`ContentEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub description: String,
    pub published_at: DateTimeUtc,
    /// Site-relative permalink, `/<collection>/<slug>/`.
    pub link: String,
    pub updated_at: Option<DateTimeUtc>,
}

impl From<&ContentEntry> for FeedItem {
    fn from(entry: &ContentEntry) -> Self {
        Self {
            title: entry.title.clone(),
            description: entry.description.clone(),
            published_at: entry.date,
            link: entry.link(),
            updated_at: entry.updated,
        }
    }
}

/// Build the ordered feed from one or more collections.
///
/// Renderable entries from all collections are concatenated in input order
/// and stable-sorted by `date`, newest first, so entries sharing a timestamp
/// keep their relative input order.
pub fn assemble_feed<'a, C>(collections: C, mode: RuntimeMode) -> Vec<FeedItem>
where
    C: IntoIterator<Item = &'a [ContentEntry]>,
{
    let mut entries: Vec<&ContentEntry> = collections
        .into_iter()
        .flatten()
        .filter(|entry| should_render(entry, mode))
        .collect();

    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries.into_iter().map(FeedItem::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Collection, Visibility};

    fn post(slug: &str, date: DateTimeUtc) -> ContentEntry {
        ContentEntry::new(Collection::Blog, slug, slug.to_uppercase(), date)
            .with_description(format!("about {slug}"))
    }

    fn project(slug: &str, date: DateTimeUtc) -> ContentEntry {
        ContentEntry::new(Collection::Projects, slug, slug.to_uppercase(), date)
    }

    fn titles(items: &[FeedItem]) -> Vec<&str> {
        items.iter().map(|i| i.title.as_str()).collect()
    }

    fn ymd(y: u16, m: u8, d: u8) -> DateTimeUtc {
        DateTimeUtc::from_ymd(y, m, d)
    }

    #[test]
    fn test_draft_only_in_development() {
        let entries = vec![
            post("a", ymd(2024, 1, 1)).with_draft(false),
            post("b", ymd(2024, 6, 1)).with_draft(true),
        ];

        let prod = assemble_feed([entries.as_slice()], RuntimeMode::Production);
        assert_eq!(titles(&prod), vec!["A"]);

        let dev = assemble_feed([entries.as_slice()], RuntimeMode::Development);
        assert_eq!(titles(&dev), vec!["B", "A"]);
    }

    #[test]
    fn test_archived_entries_stay_in_feed() {
        let entries = vec![
            post("x", ymd(2023, 1, 1)).with_archive(true),
            post("y", ymd(2023, 2, 1)),
        ];
        let feed = assemble_feed([entries.as_slice()], RuntimeMode::Production);
        assert_eq!(titles(&feed), vec!["Y", "X"]);
    }

    #[test]
    fn test_merges_collections_by_date() {
        let blog = vec![post("old-post", ymd(2022, 1, 1)), post("new-post", ymd(2024, 1, 1))];
        let projects = vec![project("mid-project", ymd(2023, 1, 1))];

        let feed = assemble_feed(
            [blog.as_slice(), projects.as_slice()],
            RuntimeMode::Production,
        );
        assert_eq!(titles(&feed), vec!["NEW-POST", "MID-PROJECT", "OLD-POST"]);
        assert_eq!(feed[1].link, "/projects/mid-project/");
    }

    #[test]
    fn test_sorted_non_increasing() {
        let entries: Vec<_> = [5u8, 1, 9, 3, 9, 7]
            .iter()
            .enumerate()
            .map(|(i, d)| post(&format!("p{i}"), ymd(2024, 1, *d)))
            .collect();
        let feed = assemble_feed([entries.as_slice()], RuntimeMode::Production);
        assert!(feed.windows(2).all(|w| w[0].published_at >= w[1].published_at));
    }

    #[test]
    fn test_equal_dates_keep_input_order() {
        let day = ymd(2024, 3, 3);
        let blog = vec![post("first", day), post("second", day)];
        let projects = vec![project("third", day)];

        let feed = assemble_feed([blog.as_slice(), projects.as_slice()], RuntimeMode::Production);
        assert_eq!(titles(&feed), vec!["FIRST", "SECOND", "THIRD"]);
    }

    #[test]
    fn test_inclusion_matches_should_render() {
        let mut entries = Vec::new();
        for (i, draft) in [None, Some(false), Some(true)].into_iter().enumerate() {
            for (j, archive) in [None, Some(false), Some(true)].into_iter().enumerate() {
                let mut e = post(&format!("e{i}{j}"), ymd(2024, 1, (i * 3 + j + 1) as u8));
                e.draft = draft;
                e.archive = archive;
                entries.push(e);
            }
        }

        for mode in [RuntimeMode::Development, RuntimeMode::Production] {
            let feed = assemble_feed([entries.as_slice()], mode);
            for e in &entries {
                let included = feed.iter().any(|item| item.link == e.link());
                assert_eq!(included, Visibility::of(e).should_render(mode), "{} in {mode}", e.slug);
            }
        }
    }

    #[test]
    fn test_projection() {
        let entries = vec![
            post("plain", ymd(2024, 1, 1)),
            post("revised", ymd(2023, 1, 1)).with_updated(ymd(2024, 2, 2)),
        ];
        let feed = assemble_feed([entries.as_slice()], RuntimeMode::Production);

        assert_eq!(feed[0].link, "/blog/plain/");
        assert_eq!(feed[0].description, "about plain");
        assert_eq!(feed[0].published_at, ymd(2024, 1, 1));
        assert_eq!(feed[0].updated_at, None);
        assert_eq!(feed[1].updated_at, Some(ymd(2024, 2, 2)));
    }

    #[test]
    fn test_idempotent() {
        let entries = vec![
            post("a", ymd(2024, 1, 1)),
            post("b", ymd(2024, 1, 1)).with_archive(true),
            post("c", ymd(2025, 1, 1)).with_draft(true),
        ];
        let first = assemble_feed([entries.as_slice()], RuntimeMode::Development);
        let second = assemble_feed([entries.as_slice()], RuntimeMode::Development);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        let feed = assemble_feed(std::iter::empty::<&[ContentEntry]>(), RuntimeMode::Production);
        assert!(feed.is_empty());
    }
}
