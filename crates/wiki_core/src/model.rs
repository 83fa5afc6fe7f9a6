/// Identifier of one processing run. A fresh id is issued on every submit so
/// results belonging to a torn-down run can be recognised and dropped.
pub type RunId = u64;

/// An extracted keyword or concept. `kind` is an open category label such as
/// "Person" or "Technology".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
    pub kind: String,
}

/// One generated encyclopaedia record.
///
/// `id` and `channel_name` are stamped client-side after generation; every
/// other field comes from the generator verbatim. `sentiment_score` is
/// nominally in `[0, 100]` but out-of-range values are kept as delivered.
#[derive(Debug, Clone, PartialEq)]
pub struct WikiEntry {
    pub id: String,
    pub channel_name: String,
    pub video_id: String,
    pub title: String,
    pub publish_date: String,
    pub summary: String,
    pub full_content: String,
    pub entities: Vec<Entity>,
    pub category: String,
    pub sentiment_score: f64,
    pub views: f64,
}

/// Root aggregate produced by one successful generation.
///
/// `total_videos` always equals `entries.len()`; use [`WikiData::new`] so the
/// count is derived rather than copied from generator output.
#[derive(Debug, Clone, PartialEq)]
pub struct WikiData {
    pub channel_name: String,
    pub channel_description: String,
    pub subscribers: String,
    pub total_videos: usize,
    pub entries: Vec<WikiEntry>,
}

impl WikiData {
    pub fn new(
        channel_name: impl Into<String>,
        channel_description: impl Into<String>,
        subscribers: impl Into<String>,
        entries: Vec<WikiEntry>,
    ) -> Self {
        Self {
            channel_name: channel_name.into(),
            channel_description: channel_description.into(),
            subscribers: subscribers.into(),
            total_videos: entries.len(),
            entries,
        }
    }

    pub fn entry(&self, entry_id: &str) -> Option<&WikiEntry> {
        self.entries.iter().find(|entry| entry.id == entry_id)
    }
}
