use wiki_core::{Entity, WikiData, WikiEntry};

use crate::schema::RawWikiData;

/// Turn a decoded reply into the client data model.
///
/// Each entry gets `vid_{index}_{stamp_ms}` as id, which stays unique within
/// the reply even when two entries are otherwise identical. The channel name
/// reported by the generator is stamped onto every entry (the requested name
/// is used if the generator left it blank) and `total_videos` is recomputed
/// from the delivered entries.
pub fn into_wiki_data(raw: RawWikiData, requested_channel: &str, stamp_ms: i64) -> WikiData {
    let channel_name = if raw.channel_name.trim().is_empty() {
        requested_channel.to_string()
    } else {
        raw.channel_name
    };

    let entries = raw
        .entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| WikiEntry {
            id: format!("vid_{index}_{stamp_ms}"),
            channel_name: channel_name.clone(),
            video_id: entry.video_id,
            title: entry.title,
            publish_date: entry.publish_date,
            summary: entry.summary,
            full_content: entry.full_content,
            entities: entry
                .entities
                .into_iter()
                .map(|entity| Entity {
                    name: entity.name,
                    kind: entity.kind,
                })
                .collect(),
            category: entry.category,
            sentiment_score: entry.sentiment_score,
            views: entry.views,
        })
        .collect();

    WikiData::new(
        channel_name,
        raw.channel_description,
        raw.subscribers,
        entries,
    )
}
