use wiki_core::{AppViewModel, BrowsingView, Msg, ScreenView};

pub const HELP: &str = "\
Commands:
  <text>            submit a channel name, or search while browsing
  /search <text>    filter entries by title or summary (empty clears)
  /category <name>  show one category (\"All\" shows everything)
  /open <n|id>      open the n-th listed entry as an article
  /back             return to the dashboard
  /save             save or unsave the open article
  /login, /logout   demo sign-in
  /reset            start over with a new channel
  /help             show this text
  /quit             exit";

/// One line typed on stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Text(String),
    Search(String),
    Category(String),
    Open(String),
    Back,
    Save,
    Login,
    Logout,
    Reset,
    Help,
    Quit,
}

pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let Some(rest) = line.strip_prefix('/') else {
        return Ok(Command::Text(line.to_string()));
    };
    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim().to_string()),
        None => (rest, String::new()),
    };
    let command = match name.to_ascii_lowercase().as_str() {
        "search" | "s" => Command::Search(arg),
        "category" | "c" => Command::Category(arg),
        "open" | "o" if !arg.is_empty() => Command::Open(arg),
        "open" | "o" => return Err("usage: /open <n|id>".to_string()),
        "back" | "b" => Command::Back,
        "save" => Command::Save,
        "login" => Command::Login,
        "logout" => Command::Logout,
        "reset" | "new" => Command::Reset,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => return Err(format!("unknown command /{other}; try /help")),
    };
    Ok(command)
}

/// Translate a command into core messages against what is on screen now.
///
/// `Help` and `Quit` are handled by the caller and yield nothing here.
pub fn to_msgs(command: Command, view: &AppViewModel) -> Vec<Msg> {
    match command {
        Command::Text(text) => match &view.screen {
            ScreenView::Entry { .. } => vec![Msg::InputChanged(text), Msg::Submitted],
            ScreenView::Browsing(_) => vec![Msg::SearchChanged(text)],
            ScreenView::Processing(_) => Vec::new(),
        },
        Command::Search(text) => vec![Msg::SearchChanged(text)],
        Command::Category(name) => {
            let category = match &view.screen {
                ScreenView::Browsing(browsing) => canonical_category(browsing, &name),
                _ => name,
            };
            vec![Msg::CategorySelected(category)]
        }
        Command::Open(target) => match &view.screen {
            ScreenView::Browsing(browsing) => resolve_entry(browsing, &target)
                .map(|entry_id| vec![Msg::EntryOpened { entry_id }])
                .unwrap_or_default(),
            _ => Vec::new(),
        },
        Command::Back => vec![Msg::BackToDashboard],
        Command::Save => match &view.screen {
            ScreenView::Browsing(browsing) => browsing
                .article
                .as_ref()
                .map(|article| {
                    vec![Msg::SaveToggled {
                        entry_id: article.entry.id.clone(),
                    }]
                })
                .unwrap_or_default(),
            _ => Vec::new(),
        },
        Command::Login => vec![Msg::LoginClicked],
        Command::Logout => vec![Msg::LogoutClicked],
        Command::Reset => vec![Msg::ResetClicked],
        Command::Help | Command::Quit => Vec::new(),
    }
}

fn canonical_category(browsing: &BrowsingView, name: &str) -> String {
    browsing
        .categories
        .iter()
        .find(|category| category.eq_ignore_ascii_case(name))
        .cloned()
        .unwrap_or_else(|| name.to_string())
}

/// A 1-based position in the card list, an entry id, or a title.
fn resolve_entry(browsing: &BrowsingView, target: &str) -> Option<String> {
    if let Ok(position) = target.parse::<usize>() {
        return position
            .checked_sub(1)
            .and_then(|index| browsing.cards.get(index))
            .map(|card| card.id.clone());
    }
    let by_id = browsing
        .cards
        .iter()
        .map(|card| (&card.id, &card.title))
        .chain(browsing.recent.iter().map(|link| (&link.id, &link.title)));
    let mut by_title = None;
    for (id, title) in by_id {
        if id == target {
            return Some(id.clone());
        }
        if by_title.is_none() && title.eq_ignore_ascii_case(target) {
            by_title = Some(id.clone());
        }
    }
    by_title
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wiki_core::{AppState, Entity, Msg, WikiData, WikiEntry};

    fn entry(id: &str, title: &str, category: &str) -> WikiEntry {
        WikiEntry {
            id: id.to_string(),
            channel_name: "Fireship".to_string(),
            video_id: "abc".to_string(),
            title: title.to_string(),
            publish_date: "2024-01-01".to_string(),
            summary: "Summary".to_string(),
            full_content: "Body".to_string(),
            entities: vec![Entity {
                name: "Rust".to_string(),
                kind: "Technology".to_string(),
            }],
            category: category.to_string(),
            sentiment_score: 80.0,
            views: 1000.0,
        }
    }

    fn browsing_state() -> AppState {
        let data = WikiData::new(
            "Fireship",
            "Code tutorials",
            "3M",
            vec![
                entry("vid_0_1", "Rust in 100 Seconds", "Programming"),
                entry("vid_1_1", "Black Holes", "Science"),
            ],
        );
        let state = AppState::new();
        let (state, _) = wiki_core::update(state, Msg::InputChanged("Fireship".into()));
        let (state, _) = wiki_core::update(state, Msg::Submitted);
        let run_id = state.active_run().expect("run started");
        let (state, _) = wiki_core::update(state, Msg::GenerationDispatched { run_id });
        let (mut state, _) = wiki_core::update(state, Msg::GenerationSucceeded { run_id, data });
        for _ in 0..6 {
            state = wiki_core::update(state, Msg::PipelineTick { run_id }).0;
        }
        wiki_core::update(state, Msg::SettleElapsed { run_id }).0
    }

    #[test]
    fn parses_plain_text_and_commands() {
        assert_eq!(parse("  Veritasium "), Ok(Command::Text("Veritasium".into())));
        assert_eq!(parse("/search  rust lang "), Ok(Command::Search("rust lang".into())));
        assert_eq!(parse("/search"), Ok(Command::Search(String::new())));
        assert_eq!(parse("/Q"), Ok(Command::Quit));
        assert_eq!(parse("/open 2"), Ok(Command::Open("2".into())));
        assert!(parse("/open").is_err());
        assert!(parse("/frobnicate").is_err());
    }

    #[test]
    fn text_on_entry_submits_the_channel() {
        let view = AppState::new().view();
        assert_eq!(
            to_msgs(Command::Text("Fireship".into()), &view),
            vec![Msg::InputChanged("Fireship".into()), Msg::Submitted]
        );
    }

    #[test]
    fn text_while_browsing_searches() {
        let view = browsing_state().view();
        assert_eq!(
            to_msgs(Command::Text("hole".into()), &view),
            vec![Msg::SearchChanged("hole".into())]
        );
    }

    #[test]
    fn category_matches_case_insensitively() {
        let view = browsing_state().view();
        assert_eq!(
            to_msgs(Command::Category("science".into()), &view),
            vec![Msg::CategorySelected("Science".into())]
        );
        assert_eq!(
            to_msgs(Command::Category("all".into()), &view),
            vec![Msg::CategorySelected("All".into())]
        );
    }

    #[test]
    fn open_resolves_position_id_and_title() {
        let view = browsing_state().view();
        let opened = |target: &str| to_msgs(Command::Open(target.into()), &view);
        assert_eq!(
            opened("2"),
            vec![Msg::EntryOpened {
                entry_id: "vid_1_1".into()
            }]
        );
        assert_eq!(
            opened("vid_0_1"),
            vec![Msg::EntryOpened {
                entry_id: "vid_0_1".into()
            }]
        );
        assert_eq!(
            opened("black holes"),
            vec![Msg::EntryOpened {
                entry_id: "vid_1_1".into()
            }]
        );
        assert!(opened("0").is_empty());
        assert!(opened("9").is_empty());
    }

    #[test]
    fn save_targets_the_open_article() {
        let state = browsing_state();
        assert!(to_msgs(Command::Save, &state.view()).is_empty());

        let (state, _) = wiki_core::update(
            state,
            Msg::EntryOpened {
                entry_id: "vid_0_1".into(),
            },
        );
        assert_eq!(
            to_msgs(Command::Save, &state.view()),
            vec![Msg::SaveToggled {
                entry_id: "vid_0_1".into()
            }]
        );
    }
}
