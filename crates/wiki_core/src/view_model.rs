use crate::projection::{self, SentimentPoint};
use crate::state::{BrowsingSession, ProcessingRun, Screen, ViewMode};
use crate::{AppState, AuthUser, ProcessingStep, WikiEntry};

/// Number of entity tags shown on an entry card.
pub const CARD_TAG_LIMIT: usize = 2;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub screen: ScreenView,
    pub input: String,
    pub user: Option<AuthUser>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView {
    Entry { banner: Option<String> },
    Processing(ProcessingView),
    Browsing(Box<BrowsingView>),
}

impl Default for ScreenView {
    fn default() -> Self {
        ScreenView::Entry { banner: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingView {
    pub channel: String,
    pub steps: Vec<ProcessingStep>,
    /// Animation finished but the data has not arrived yet.
    pub finalizing: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrowsingView {
    pub channel_name: String,
    pub channel_description: String,
    pub subscribers: String,
    pub total_videos: usize,
    pub search: String,
    pub selected_category: String,
    pub categories: Vec<String>,
    pub cards: Vec<EntryCardView>,
    pub recent: Vec<EntryLinkView>,
    pub sentiment: Vec<SentimentPoint>,
    pub category_distribution: Vec<(String, usize)>,
    pub article: Option<ArticleView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryCardView {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub category: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLinkView {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleView {
    pub entry: WikiEntry,
    pub saved: bool,
    pub signed_in: bool,
}

impl AppViewModel {
    pub(crate) fn project(state: &AppState) -> Self {
        let screen = match state.screen() {
            Screen::Entry => ScreenView::Entry { banner: None },
            Screen::Error { message } => ScreenView::Entry {
                banner: Some(message.clone()),
            },
            Screen::Processing(run) => ScreenView::Processing(processing_view(run)),
            Screen::Browsing(session) => ScreenView::Browsing(Box::new(browsing_view(
                session,
                state.user().is_some(),
            ))),
        };
        Self {
            screen,
            input: state.input().to_string(),
            user: state.user().cloned(),
        }
    }
}

fn processing_view(run: &ProcessingRun) -> ProcessingView {
    ProcessingView {
        channel: run.channel.clone(),
        steps: run.animator.steps().to_vec(),
        finalizing: run.animation_done() && !run.data_ready(),
    }
}

fn browsing_view(session: &BrowsingSession, signed_in: bool) -> BrowsingView {
    let data = &session.data;
    let cards = projection::filter_entries(&data.entries, &session.search, &session.category)
        .into_iter()
        .map(|entry| EntryCardView {
            id: entry.id.clone(),
            title: entry.title.clone(),
            summary: entry.summary.clone(),
            category: entry.category.clone(),
            tags: entry
                .entities
                .iter()
                .take(CARD_TAG_LIMIT)
                .map(|entity| entity.name.clone())
                .collect(),
        })
        .collect();
    let recent = projection::recent_entries(&data.entries)
        .iter()
        .map(|entry| EntryLinkView {
            id: entry.id.clone(),
            title: entry.title.clone(),
        })
        .collect();
    let article = match (session.mode, session.current_entry.as_deref()) {
        (ViewMode::Article, Some(id)) => data.entry(id).map(|entry| ArticleView {
            entry: entry.clone(),
            saved: session.saved.contains(id),
            signed_in,
        }),
        _ => None,
    };

    BrowsingView {
        channel_name: data.channel_name.clone(),
        channel_description: data.channel_description.clone(),
        subscribers: data.subscribers.clone(),
        total_videos: data.total_videos,
        search: session.search.clone(),
        selected_category: session.category.clone(),
        categories: projection::categories(&data.entries),
        cards,
        recent,
        sentiment: projection::sentiment_series(&data.entries),
        category_distribution: projection::category_distribution(&data.entries),
        article,
    }
}
