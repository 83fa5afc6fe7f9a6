use std::fmt;

use wiki_core::{RunId, WikiData};

use crate::GenerationError;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// Configuration was valid and the generation request has been sent.
    GenerationDispatched { run_id: RunId },
    GenerationCompleted {
        run_id: RunId,
        result: Result<WikiData, GenerationError>,
    },
    PipelineTick { run_id: RunId },
    SettleElapsed { run_id: RunId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Configuration,
    Transport,
    Content,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Configuration => write!(f, "configuration"),
            FailureKind::Transport => write!(f, "transport"),
            FailureKind::Content => write!(f, "content"),
        }
    }
}
