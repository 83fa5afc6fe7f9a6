use pretty_assertions::assert_eq;
use proptest::prelude::*;
use wiki_core::projection::{categories, filter_entries, ALL_CATEGORY};
use wiki_core::{
    update, AppState, AuthUser, BrowsingView, Entity, Msg, ScreenView, WikiData, WikiEntry,
};

fn entry(id: &str, title: &str, summary: &str, category: &str) -> WikiEntry {
    WikiEntry {
        id: id.to_string(),
        channel_name: "Fireship".to_string(),
        video_id: format!("yt_{id}"),
        title: title.to_string(),
        publish_date: "2024-03-01".to_string(),
        summary: summary.to_string(),
        full_content: "Body".to_string(),
        entities: vec![
            Entity {
                name: "Rust".to_string(),
                kind: "Technology".to_string(),
            },
            Entity {
                name: "WebAssembly".to_string(),
                kind: "Technology".to_string(),
            },
            Entity {
                name: "Mozilla".to_string(),
                kind: "Organization".to_string(),
            },
        ],
        category: category.to_string(),
        sentiment_score: 80.0,
        views: 250_000.0,
    }
}

fn browsing_state(entries: Vec<WikiEntry>) -> AppState {
    let (state, _) = update(AppState::new(), Msg::InputChanged("Fireship".to_string()));
    let (state, _) = update(state, Msg::Submitted);
    let (mut state, _) = update(state, Msg::GenerationDispatched { run_id: 1 });
    for _ in 0..6 {
        state = update(state, Msg::PipelineTick { run_id: 1 }).0;
    }
    let data = WikiData::new("Fireship", "High-intensity code tutorials", "3.1M", entries);
    let (state, _) = update(state, Msg::GenerationSucceeded { run_id: 1, data });
    update(state, Msg::SettleElapsed { run_id: 1 }).0
}

fn browsing_view(state: &AppState) -> BrowsingView {
    match state.view().screen {
        ScreenView::Browsing(view) => *view,
        other => panic!("expected browsing screen, got {other:?}"),
    }
}

#[test]
fn search_ai_in_all_categories() {
    let state = browsing_state(vec![
        entry("a", "AI Basics", "Neural networks", "Tech"),
        entry("b", "Cooking", "Pasta", "Food"),
    ]);
    let (state, _) = update(state, Msg::SearchChanged("ai".to_string()));

    let view = browsing_view(&state);
    assert_eq!(view.selected_category, ALL_CATEGORY);
    let ids: Vec<_> = view.cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["a"]);
}

#[test]
fn category_selection_narrows_cards() {
    let state = browsing_state(vec![
        entry("a", "AI Basics", "", "Tech"),
        entry("b", "Cooking", "", "Food"),
        entry("c", "Rust in 100 Seconds", "", "Tech"),
    ]);
    let (state, _) = update(state, Msg::CategorySelected("Tech".to_string()));

    let view = browsing_view(&state);
    assert_eq!(view.categories, vec!["All", "Tech", "Food"]);
    let ids: Vec<_> = view.cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
    assert_eq!(view.total_videos, 3);
    assert_eq!(
        view.category_distribution,
        vec![("Tech".to_string(), 2), ("Food".to_string(), 1)]
    );
}

#[test]
fn cards_show_two_entity_tags() {
    let state = browsing_state(vec![entry("a", "AI Basics", "", "Tech")]);
    let view = browsing_view(&state);
    assert_eq!(view.cards[0].tags, vec!["Rust", "WebAssembly"]);
}

#[test]
fn filtering_does_not_mutate_entries() {
    let state = browsing_state(vec![
        entry("a", "AI Basics", "", "Tech"),
        entry("b", "Cooking", "", "Food"),
    ]);
    let before = state.wiki_data().cloned();
    let (state, _) = update(state, Msg::SearchChanged("zzz".to_string()));
    let (state, _) = update(state, Msg::CategorySelected("Food".to_string()));

    assert!(browsing_view(&state).cards.is_empty());
    assert_eq!(state.wiki_data().cloned(), before);
}

#[test]
fn opening_an_article_and_going_back() {
    let state = browsing_state(vec![entry("a", "AI Basics", "", "Tech")]);
    let (state, _) = update(
        state,
        Msg::EntryOpened {
            entry_id: "a".to_string(),
        },
    );
    let article = browsing_view(&state).article.expect("article open");
    assert_eq!(article.entry.title, "AI Basics");
    assert!(!article.saved);
    assert!(!article.signed_in);

    let (state, _) = update(state, Msg::BackToDashboard);
    assert!(browsing_view(&state).article.is_none());
}

#[test]
fn unknown_entry_is_not_opened() {
    let state = browsing_state(vec![entry("a", "AI Basics", "", "Tech")]);
    let (state, _) = update(
        state,
        Msg::EntryOpened {
            entry_id: "missing".to_string(),
        },
    );
    assert!(browsing_view(&state).article.is_none());
}

#[test]
fn saving_requires_sign_in() {
    let state = browsing_state(vec![entry("a", "AI Basics", "", "Tech")]);
    let (state, _) = update(
        state,
        Msg::EntryOpened {
            entry_id: "a".to_string(),
        },
    );

    // Signed out: the click signs in instead of saving.
    let (state, _) = update(
        state,
        Msg::SaveToggled {
            entry_id: "a".to_string(),
        },
    );
    assert_eq!(state.user(), Some(&AuthUser::demo()));
    assert!(!browsing_view(&state).article.unwrap().saved);

    let (state, _) = update(
        state,
        Msg::SaveToggled {
            entry_id: "a".to_string(),
        },
    );
    let article = browsing_view(&state).article.unwrap();
    assert!(article.saved);
    assert!(article.signed_in);

    let (state, _) = update(
        state,
        Msg::SaveToggled {
            entry_id: "a".to_string(),
        },
    );
    assert!(!browsing_view(&state).article.unwrap().saved);
}

#[test]
fn login_and_logout_round_trip() {
    let (state, _) = update(AppState::new(), Msg::LoginClicked);
    assert_eq!(state.view().user, Some(AuthUser::demo()));
    let (state, _) = update(state, Msg::LogoutClicked);
    assert_eq!(state.view().user, None);
}

fn arb_entry() -> impl Strategy<Value = WikiEntry> {
    (
        "[a-zA-Z ]{0,12}",
        "[a-zA-Z ]{0,12}",
        prop_oneof![Just("Tech"), Just("Food"), Just("Science")],
    )
        .prop_map(|(title, summary, category)| entry("x", &title, &summary, category))
}

proptest! {
    #[test]
    fn category_and_search_filters_commute(
        entries in proptest::collection::vec(arb_entry(), 0..12),
        search in "[a-zA-Z]{0,3}",
        category in prop_oneof![Just("All"), Just("Tech"), Just("Food"), Just("Nope")],
    ) {
        let combined: Vec<WikiEntry> =
            filter_entries(&entries, &search, category).into_iter().cloned().collect();

        let by_category: Vec<WikiEntry> =
            filter_entries(&entries, "", category).into_iter().cloned().collect();
        let category_then_search: Vec<WikiEntry> =
            filter_entries(&by_category, &search, ALL_CATEGORY).into_iter().cloned().collect();

        let by_search: Vec<WikiEntry> =
            filter_entries(&entries, &search, ALL_CATEGORY).into_iter().cloned().collect();
        let search_then_category: Vec<WikiEntry> =
            filter_entries(&by_search, "", category).into_iter().cloned().collect();

        prop_assert_eq!(&category_then_search, &search_then_category);
        prop_assert_eq!(&combined, &category_then_search);
    }

    #[test]
    fn categories_start_with_all_and_are_unique(
        entries in proptest::collection::vec(arb_entry(), 0..12),
    ) {
        let cats = categories(&entries);
        prop_assert_eq!(cats[0].as_str(), ALL_CATEGORY);
        let mut sorted = cats[1..].to_vec();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), cats.len() - 1);
    }
}
