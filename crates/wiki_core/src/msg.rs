use crate::{RunId, WikiData};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the channel name input.
    InputChanged(String),
    /// User submitted the current channel name for generation.
    Submitted,
    /// Engine validated its configuration and issued the generation request.
    GenerationDispatched { run_id: RunId },
    /// Engine produced the dataset for a run.
    GenerationSucceeded { run_id: RunId, data: WikiData },
    /// Engine failed a run. `message` is already normalised for display.
    GenerationFailed { run_id: RunId, message: String },
    /// Pipeline timer fired for a run.
    PipelineTick { run_id: RunId },
    /// Settle delay after both gate signals became ready has elapsed.
    SettleElapsed { run_id: RunId },
    /// User asked to start over with a new channel.
    ResetClicked,
    /// User edited the browsing search box.
    SearchChanged(String),
    /// User picked a category in the browsing sidebar.
    CategorySelected(String),
    /// User opened an entry as an article.
    EntryOpened { entry_id: String },
    /// User went from an article back to the dashboard.
    BackToDashboard,
    /// User toggled "save to library" on an entry.
    SaveToggled { entry_id: String },
    LoginClicked,
    LogoutClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
