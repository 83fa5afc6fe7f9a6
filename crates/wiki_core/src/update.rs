use crate::gate::{self, GateDecision};
use crate::state::{BrowsingSession, ProcessingRun, Screen, ViewMode};
use crate::{AppState, AuthUser, Effect, Msg, RunId, WikiData};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::Submitted => submit(&mut state),
        Msg::GenerationDispatched { run_id } => start_pipeline(&mut state, run_id),
        Msg::PipelineTick { run_id } => tick(&mut state, run_id),
        Msg::GenerationSucceeded { run_id, data } => accept_data(&mut state, run_id, data),
        Msg::GenerationFailed { run_id, message } => fail(&mut state, run_id, message),
        Msg::SettleElapsed { run_id } => settle(&mut state, run_id),
        Msg::ResetClicked => reset(&mut state),
        Msg::SearchChanged(text) => {
            if let Some(session) = state.session_mut() {
                session.search = text;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CategorySelected(category) => {
            if let Some(session) = state.session_mut() {
                session.category = category;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::EntryOpened { entry_id } => {
            if let Some(session) = state.session_mut() {
                if session.data.entry(&entry_id).is_some() {
                    session.current_entry = Some(entry_id);
                    session.mode = ViewMode::Article;
                    state.mark_dirty();
                }
            }
            Vec::new()
        }
        Msg::BackToDashboard => {
            if let Some(session) = state.session_mut() {
                session.current_entry = None;
                session.mode = ViewMode::Dashboard;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SaveToggled { entry_id } => {
            toggle_saved(&mut state, entry_id);
            Vec::new()
        }
        Msg::LoginClicked => {
            state.set_user(Some(AuthUser::demo()));
            Vec::new()
        }
        Msg::LogoutClicked => {
            state.set_user(None);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    let channel = state.input().trim().to_string();
    if channel.is_empty() || !state.screen().accepts_submission() {
        return Vec::new();
    }

    let run_id = state.next_run_id();
    state.set_screen(Screen::Processing(ProcessingRun::new(
        run_id,
        channel.clone(),
    )));
    vec![Effect::StartGeneration { run_id, channel }]
}

fn start_pipeline(state: &mut AppState, run_id: RunId) -> Vec<Effect> {
    let interval = state.timing().tick_interval;
    let Some(run) = state.run_mut(run_id) else {
        return Vec::new();
    };
    if run.started {
        return Vec::new();
    }
    run.started = true;
    vec![Effect::StartPipelineTimer { run_id, interval }]
}

fn tick(state: &mut AppState, run_id: RunId) -> Vec<Effect> {
    let delay = state.timing().settle_delay;
    let Some(run) = state.run_mut(run_id) else {
        return Vec::new();
    };
    if !run.started || run.animation_done() {
        return Vec::new();
    }

    run.animator = run.animator.advance();
    let mut effects = Vec::new();
    if run.animation_done() {
        effects.push(Effect::StopPipelineTimer { run_id });
    }
    effects.extend(check_gate(run, delay));
    state.mark_dirty();
    effects
}

fn accept_data(state: &mut AppState, run_id: RunId, data: WikiData) -> Vec<Effect> {
    let delay = state.timing().settle_delay;
    let Some(run) = state.run_mut(run_id) else {
        return Vec::new();
    };
    if run.data_ready() {
        return Vec::new();
    }

    run.data = Some(data);
    let effects = check_gate(run, delay).into_iter().collect();
    state.mark_dirty();
    effects
}

fn check_gate(run: &mut ProcessingRun, delay: std::time::Duration) -> Option<Effect> {
    match run.gate() {
        GateDecision::ScheduleSettle => {
            run.settle_scheduled = true;
            Some(Effect::ScheduleSettle {
                run_id: run.run_id,
                delay,
            })
        }
        GateDecision::Wait | GateDecision::AwaitSettle => None,
    }
}

fn settle(state: &mut AppState, run_id: RunId) -> Vec<Effect> {
    let Some(run) = state.run_mut(run_id) else {
        return Vec::new();
    };
    if !gate::may_transition(run.animation_done(), run.data_ready()) {
        return Vec::new();
    }
    if let Some(data) = run.data.take() {
        state.set_screen(Screen::Browsing(BrowsingSession::new(data)));
    }
    Vec::new()
}

fn fail(state: &mut AppState, run_id: RunId, message: String) -> Vec<Effect> {
    let Some(run) = state.run_mut(run_id) else {
        return Vec::new();
    };
    let started = run.started;
    state.set_screen(Screen::Error { message });
    if started {
        vec![Effect::StopPipelineTimer { run_id }]
    } else {
        Vec::new()
    }
}

fn reset(state: &mut AppState) -> Vec<Effect> {
    let effects = match state.screen() {
        Screen::Processing(run) if run.started => vec![Effect::StopPipelineTimer {
            run_id: run.run_id,
        }],
        _ => Vec::new(),
    };
    state.set_input(String::new());
    state.set_screen(Screen::Entry);
    effects
}

fn toggle_saved(state: &mut AppState, entry_id: String) {
    if state.user().is_none() {
        if state.wiki_data().is_some() {
            state.set_user(Some(AuthUser::demo()));
        }
        return;
    }
    let Some(session) = state.session_mut() else {
        return;
    };
    if session.data.entry(&entry_id).is_none() {
        return;
    }
    if !session.saved.remove(&entry_id) {
        session.saved.insert(entry_id);
    }
    state.mark_dirty();
}
