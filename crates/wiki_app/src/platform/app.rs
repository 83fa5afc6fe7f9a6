use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use wiki_core::{update, AppState, Msg, PipelineTiming, Screen};
use wiki_engine::GenerationSettings;
use wiki_logging::{wiki_debug, wiki_info};

use super::commands::{self, Command, HELP};
use super::effects::EffectRunner;
use super::ui;

pub struct AppOptions {
    pub channel: Option<String>,
    pub timing: PipelineTiming,
}

/// Everything the main loop reacts to, in arrival order.
pub enum AppInput {
    Msg(Msg),
    Line(String),
    InputClosed,
}

pub fn run_app(options: AppOptions) -> anyhow::Result<()> {
    let (input_tx, input_rx) = mpsc::channel::<AppInput>();
    let effects = EffectRunner::new(GenerationSettings::default(), input_tx.clone());
    let mut app = App::new(AppState::with_timing(options.timing), effects);

    app.render()?;
    if let Some(channel) = options.channel {
        app.dispatch(Msg::InputChanged(channel))?;
        app.dispatch(Msg::Submitted)?;
    }

    spawn_stdin_reader(input_tx);

    let mut input_closed = false;
    for input in input_rx {
        match input {
            AppInput::Msg(msg) => app.dispatch(msg)?,
            AppInput::Line(line) => match commands::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => app.print(HELP)?,
                Ok(command) => {
                    for msg in commands::to_msgs(command, &app.state.view()) {
                        app.dispatch(msg)?;
                    }
                }
                Err(message) => app.print(&message)?,
            },
            AppInput::InputClosed => input_closed = true,
        }
        // Piped input may end before a run does; let the run finish first.
        if input_closed && !app.is_processing() {
            break;
        }
    }

    wiki_info!("channelwiki exiting");
    Ok(())
}

struct App {
    state: AppState,
    effects: EffectRunner,
    out: io::Stdout,
}

impl App {
    fn new(state: AppState, effects: EffectRunner) -> Self {
        Self {
            state,
            effects,
            out: io::stdout(),
        }
    }

    fn dispatch(&mut self, msg: Msg) -> anyhow::Result<()> {
        wiki_debug!("dispatch {}", msg_name(&msg));
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.effects.enqueue(effects);
        if was_dirty {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> anyhow::Result<()> {
        let text = ui::render::render(&self.state.view());
        self.print(&text)
    }

    fn print(&mut self, text: &str) -> anyhow::Result<()> {
        let mut out = self.out.lock();
        writeln!(out, "{text}").context("write to stdout")?;
        out.flush().context("flush stdout")
    }

    fn is_processing(&self) -> bool {
        matches!(self.state.screen(), Screen::Processing(_))
    }
}

fn spawn_stdin_reader(input_tx: mpsc::Sender<AppInput>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if input_tx.send(AppInput::Line(line)).is_err() {
                return;
            }
        }
        let _ = input_tx.send(AppInput::InputClosed);
    });
}

/// Variant name only; payloads can carry whole datasets.
fn msg_name(msg: &Msg) -> &'static str {
    match msg {
        Msg::InputChanged(_) => "InputChanged",
        Msg::Submitted => "Submitted",
        Msg::GenerationDispatched { .. } => "GenerationDispatched",
        Msg::GenerationSucceeded { .. } => "GenerationSucceeded",
        Msg::GenerationFailed { .. } => "GenerationFailed",
        Msg::PipelineTick { .. } => "PipelineTick",
        Msg::SettleElapsed { .. } => "SettleElapsed",
        Msg::ResetClicked => "ResetClicked",
        Msg::SearchChanged(_) => "SearchChanged",
        Msg::CategorySelected(_) => "CategorySelected",
        Msg::EntryOpened { .. } => "EntryOpened",
        Msg::BackToDashboard => "BackToDashboard",
        Msg::SaveToggled { .. } => "SaveToggled",
        Msg::LoginClicked => "LoginClicked",
        Msg::LogoutClicked => "LogoutClicked",
        Msg::NoOp => "NoOp",
    }
}
