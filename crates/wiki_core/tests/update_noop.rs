use wiki_core::{update, AppState, Msg};

#[test]
fn update_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn browsing_messages_are_ignored_on_entry_screen() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::SearchChanged("ai".to_string()));
    let (next, more) = update(next, Msg::BackToDashboard);

    assert_eq!(state, next);
    assert!(effects.is_empty());
    assert!(more.is_empty());
}
