//! Search and category projection over generated entries.
//!
//! Everything here is recomputed from its inputs on every call; nothing is
//! cached and no entry is mutated.

use crate::WikiEntry;

/// Category sentinel that matches every entry.
pub const ALL_CATEGORY: &str = "All";

/// Number of entries listed in the "recent" side list.
pub const RECENT_LIMIT: usize = 5;

const SENTIMENT_LABEL_CHARS: usize = 15;

/// Entries whose title or summary contains `search` (case-insensitive) and
/// whose category is `category`, or any category when `category` is "All".
pub fn filter_entries<'a>(
    entries: &'a [WikiEntry],
    search: &str,
    category: &str,
) -> Vec<&'a WikiEntry> {
    let needle = search.to_lowercase();
    entries
        .iter()
        .filter(|entry| matches_search(entry, &needle) && matches_category(entry, category))
        .collect()
}

/// `needle` must already be lowercased.
pub fn matches_search(entry: &WikiEntry, needle: &str) -> bool {
    entry.title.to_lowercase().contains(needle) || entry.summary.to_lowercase().contains(needle)
}

pub fn matches_category(entry: &WikiEntry, category: &str) -> bool {
    category == ALL_CATEGORY || entry.category == category
}

/// "All" followed by each distinct category in order of first appearance.
pub fn categories(entries: &[WikiEntry]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORY.to_string()];
    for entry in entries {
        if !out[1..].iter().any(|seen| *seen == entry.category) {
            out.push(entry.category.clone());
        }
    }
    out
}

pub fn recent_entries(entries: &[WikiEntry]) -> &[WikiEntry] {
    &entries[..entries.len().min(RECENT_LIMIT)]
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentPoint {
    pub label: String,
    pub sentiment: f64,
}

/// One point per entry in generated order, labelled by a shortened title.
pub fn sentiment_series(entries: &[WikiEntry]) -> Vec<SentimentPoint> {
    entries
        .iter()
        .map(|entry| SentimentPoint {
            label: format!(
                "{}...",
                entry.title.chars().take(SENTIMENT_LABEL_CHARS).collect::<String>()
            ),
            sentiment: entry.sentiment_score,
        })
        .collect()
}

/// Entry count per category in order of first appearance.
pub fn category_distribution(entries: &[WikiEntry]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for entry in entries {
        match counts.iter_mut().find(|(name, _)| *name == entry.category) {
            Some((_, count)) => *count += 1,
            None => counts.push((entry.category.clone(), 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, summary: &str, category: &str) -> WikiEntry {
        WikiEntry {
            id: title.to_string(),
            channel_name: "Test".to_string(),
            video_id: String::new(),
            title: title.to_string(),
            publish_date: String::new(),
            summary: summary.to_string(),
            full_content: String::new(),
            entities: Vec::new(),
            category: category.to_string(),
            sentiment_score: 50.0,
            views: 0.0,
        }
    }

    #[test]
    fn search_matches_summary_too() {
        let entries = vec![
            entry("Cooking", "A guide to knife SKILLS", "Food"),
            entry("Baking", "Bread", "Food"),
        ];
        let hits = filter_entries(&entries, "skills", ALL_CATEGORY);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Cooking");
    }

    #[test]
    fn empty_search_keeps_everything_in_category() {
        let entries = vec![entry("A", "", "Tech"), entry("B", "", "Food")];
        let hits = filter_entries(&entries, "", "Tech");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "A");
    }

    #[test]
    fn category_match_is_exact() {
        let entries = vec![entry("A", "", "Tech")];
        assert!(filter_entries(&entries, "", "tech").is_empty());
    }

    #[test]
    fn categories_keep_first_appearance_order() {
        let entries = vec![
            entry("A", "", "Science"),
            entry("B", "", "Tech"),
            entry("C", "", "Science"),
        ];
        assert_eq!(categories(&entries), vec!["All", "Science", "Tech"]);
    }

    #[test]
    fn recent_entries_are_capped() {
        let entries: Vec<_> = (0..7).map(|i| entry(&i.to_string(), "", "X")).collect();
        assert_eq!(recent_entries(&entries).len(), RECENT_LIMIT);
        assert_eq!(recent_entries(&entries[..2]).len(), 2);
    }

    #[test]
    fn sentiment_labels_are_truncated() {
        let entries = vec![entry("The Fast Inverse Square Root", "", "Math")];
        let series = sentiment_series(&entries);
        assert_eq!(series[0].label, "The Fast Invers...");
    }

    #[test]
    fn distribution_counts_per_category() {
        let entries = vec![
            entry("A", "", "Tech"),
            entry("B", "", "Food"),
            entry("C", "", "Tech"),
        ];
        assert_eq!(
            category_distribution(&entries),
            vec![("Tech".to_string(), 2), ("Food".to_string(), 1)]
        );
    }
}
