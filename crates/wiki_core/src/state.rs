use std::collections::BTreeSet;

use crate::gate;
use crate::projection::ALL_CATEGORY;
use crate::view_model::AppViewModel;
use crate::{AuthUser, PipelineAnimator, PipelineTiming, RunId, WikiData};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Screen {
    #[default]
    Entry,
    Processing(ProcessingRun),
    Browsing(BrowsingSession),
    /// Entry screen showing the message of the last failed run.
    Error {
        message: String,
    },
}

impl Screen {
    pub fn accepts_submission(&self) -> bool {
        matches!(self, Screen::Entry | Screen::Error { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingRun {
    pub run_id: RunId,
    pub channel: String,
    /// Set once the engine has issued the request; the animator only ticks
    /// after that.
    pub started: bool,
    pub animator: PipelineAnimator,
    pub data: Option<WikiData>,
    pub settle_scheduled: bool,
}

impl ProcessingRun {
    pub(crate) fn new(run_id: RunId, channel: String) -> Self {
        Self {
            run_id,
            channel,
            started: false,
            animator: PipelineAnimator::new(),
            data: None,
            settle_scheduled: false,
        }
    }

    pub fn animation_done(&self) -> bool {
        self.animator.is_terminal()
    }

    pub fn data_ready(&self) -> bool {
        self.data.is_some()
    }

    pub fn gate(&self) -> gate::GateDecision {
        gate::evaluate(self.animation_done(), self.data_ready(), self.settle_scheduled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Dashboard,
    Article,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrowsingSession {
    pub data: WikiData,
    pub search: String,
    pub category: String,
    pub mode: ViewMode,
    pub current_entry: Option<String>,
    pub saved: BTreeSet<String>,
}

impl BrowsingSession {
    pub(crate) fn new(data: WikiData) -> Self {
        Self {
            data,
            search: String::new(),
            category: ALL_CATEGORY.to_string(),
            mode: ViewMode::Dashboard,
            current_entry: None,
            saved: BTreeSet::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    screen: Screen,
    input: String,
    user: Option<AuthUser>,
    timing: PipelineTiming,
    last_run_id: RunId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timing(timing: PipelineTiming) -> Self {
        Self {
            timing,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::project(self)
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    pub fn timing(&self) -> PipelineTiming {
        self.timing
    }

    /// Loaded data, present only while browsing.
    pub fn wiki_data(&self) -> Option<&WikiData> {
        match &self.screen {
            Screen::Browsing(session) => Some(&session.data),
            _ => None,
        }
    }

    /// Run id of the processing run currently on screen.
    pub fn active_run(&self) -> Option<RunId> {
        match &self.screen {
            Screen::Processing(run) => Some(run.run_id),
            _ => None,
        }
    }

    /// Returns whether a re-render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, text: String) {
        self.input = text;
    }

    pub(crate) fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.mark_dirty();
    }

    pub(crate) fn set_user(&mut self, user: Option<AuthUser>) {
        self.user = user;
        self.mark_dirty();
    }

    pub(crate) fn next_run_id(&mut self) -> RunId {
        self.last_run_id += 1;
        self.last_run_id
    }

    /// Processing run matching `run_id`, if it is still the one on screen.
    pub(crate) fn run_mut(&mut self, run_id: RunId) -> Option<&mut ProcessingRun> {
        match &mut self.screen {
            Screen::Processing(run) if run.run_id == run_id => Some(run),
            _ => None,
        }
    }

    pub(crate) fn session_mut(&mut self) -> Option<&mut BrowsingSession> {
        match &mut self.screen {
            Screen::Browsing(session) => Some(session),
            _ => None,
        }
    }
}
