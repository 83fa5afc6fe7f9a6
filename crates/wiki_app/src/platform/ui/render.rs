use std::fmt::Write;

use wiki_core::{
    AppViewModel, ArticleView, AuthUser, BrowsingView, ProcessingView, ScreenView, StepStatus,
};

const RULE: &str = "------------------------------------------------------------";

/// Text for one full redraw of the current screen.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    match &view.screen {
        ScreenView::Entry { banner } => render_entry(&mut out, banner.as_deref()),
        ScreenView::Processing(processing) => render_processing(&mut out, processing),
        ScreenView::Browsing(browsing) => match &browsing.article {
            Some(article) => render_article(&mut out, article, view.user.as_ref()),
            None => render_dashboard(&mut out, browsing, view.user.as_ref()),
        },
    }
    out
}

fn render_entry(out: &mut String, banner: Option<&str>) {
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Channel Wiki: turn a YouTube channel into an encyclopaedia");
    let _ = writeln!(out, "{RULE}");
    if let Some(message) = banner {
        let _ = writeln!(out, "! {message}");
    }
    let _ = write!(out, "Channel name or handle (/help for commands):");
}

fn render_processing(out: &mut String, view: &ProcessingView) {
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Processing \"{}\"", view.channel);
    for step in &view.steps {
        let marker = match step.status {
            StepStatus::Pending => "[ ]",
            StepStatus::Active => "[>]",
            StepStatus::Completed => "[x]",
        };
        let _ = writeln!(out, "  {marker} {}. {}", step.id, step.label);
        if step.status == StepStatus::Active {
            let _ = writeln!(out, "        {}", step.details);
        }
    }
    if view.finalizing {
        let _ = writeln!(out, "  Finalizing encyclopaedia...");
    }
    out.truncate(out.trim_end().len());
}

fn render_dashboard(out: &mut String, view: &BrowsingView, user: Option<&AuthUser>) {
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "{} Wiki | {} subscribers | {} videos indexed | {}",
        view.channel_name,
        view.subscribers,
        view.total_videos,
        signed_in_label(user)
    );
    let _ = writeln!(out, "{}", view.channel_description);
    let _ = writeln!(out, "{RULE}");

    let categories: Vec<String> = view
        .categories
        .iter()
        .map(|category| {
            if *category == view.selected_category {
                format!("[{category}]")
            } else {
                category.clone()
            }
        })
        .collect();
    let _ = writeln!(out, "Categories: {}", categories.join("  "));
    if !view.search.is_empty() {
        let _ = writeln!(out, "Search: \"{}\"", view.search);
    }
    let _ = writeln!(out);

    if view.cards.is_empty() {
        let _ = writeln!(out, "No entries match.");
    }
    for (index, card) in view.cards.iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {} [{}]", index + 1, card.title, card.category);
        let _ = writeln!(out, "    {}", card.summary);
        if !card.tags.is_empty() {
            let _ = writeln!(out, "    tags: {}", card.tags.join(", "));
        }
    }

    if !view.recent.is_empty() {
        let _ = writeln!(out);
        let titles: Vec<&str> = view.recent.iter().map(|link| link.title.as_str()).collect();
        let _ = writeln!(out, "Recent: {}", titles.join(" | "));
    }
    if !view.sentiment.is_empty() {
        let points: Vec<String> = view
            .sentiment
            .iter()
            .map(|point| format!("{} {:.0}", point.label, point.sentiment))
            .collect();
        let _ = writeln!(out, "Sentiment: {}", points.join(" | "));
    }
    if !view.category_distribution.is_empty() {
        let topics: Vec<String> = view
            .category_distribution
            .iter()
            .map(|(category, count)| format!("{category} {count}"))
            .collect();
        let _ = writeln!(out, "Topics: {}", topics.join(" | "));
    }
    out.truncate(out.trim_end().len());
}

fn render_article(out: &mut String, view: &ArticleView, user: Option<&AuthUser>) {
    let entry = &view.entry;
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{}", entry.title);
    let _ = writeln!(
        out,
        "{} | {} | published {} | {} views | sentiment {:.0}/100",
        entry.channel_name,
        entry.category,
        entry.publish_date,
        format_with_commas(entry.views),
        entry.sentiment_score
    );
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{}", entry.summary);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", entry.full_content);
    if !entry.entities.is_empty() {
        let entities: Vec<String> = entry
            .entities
            .iter()
            .map(|entity| format!("{} ({})", entity.name, entity.kind))
            .collect();
        let _ = writeln!(out);
        let _ = writeln!(out, "Entities: {}", entities.join(", "));
    }
    let _ = writeln!(out);
    let save_hint = match (view.signed_in, view.saved) {
        (false, _) => "/save signs you in first",
        (true, true) => "saved to your library (/save to remove)",
        (true, false) => "/save to add to your library",
    };
    let _ = writeln!(out, "{} | {save_hint} | /back", signed_in_label(user));
    out.truncate(out.trim_end().len());
}

fn signed_in_label(user: Option<&AuthUser>) -> String {
    match user {
        Some(user) => format!("signed in as {}", user.name),
        None => "not signed in".to_string(),
    }
}

fn format_with_commas(value: f64) -> String {
    if !value.is_finite() || value < 0.0 {
        return format!("{value:.0}");
    }
    let mut out = String::new();
    for (i, ch) in format!("{value:.0}").chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiki_core::{update, AppState, Msg};

    #[test]
    fn entry_screen_shows_banner() {
        let view = AppViewModel {
            screen: ScreenView::Entry {
                banner: Some("API_KEY is missing in environment variables.".to_string()),
            },
            ..AppViewModel::default()
        };
        let text = render(&view);
        assert!(text.contains("! API_KEY is missing in environment variables."));
    }

    #[test]
    fn processing_marks_active_stage() {
        let (state, _) = update(AppState::new(), Msg::InputChanged("Fireship".into()));
        let (state, _) = update(state, Msg::Submitted);
        let run_id = state.active_run().expect("run");
        let (state, _) = update(state, Msg::GenerationDispatched { run_id });
        let (state, _) = update(state, Msg::PipelineTick { run_id });

        let text = render(&state.view());
        assert!(text.contains("Processing \"Fireship\""));
        assert!(text.contains("[>] 1. Channel Metadata Retrieval"));
        assert!(text.contains("[ ] 5. Encyclopaedia Publication"));
        assert!(!text.contains("Finalizing"));
    }

    #[test]
    fn commas_group_thousands() {
        assert_eq!(format_with_commas(0.0), "0");
        assert_eq!(format_with_commas(999.0), "999");
        assert_eq!(format_with_commas(1_234_567.0), "1,234,567");
    }
}
