//! Channelwiki core: pure state machine, completion gate and view projection.
mod auth;
mod effect;
pub mod gate;
mod model;
mod msg;
mod pipeline;
pub mod projection;
mod state;
mod update;
mod view_model;

pub use auth::AuthUser;
pub use effect::Effect;
pub use model::{Entity, RunId, WikiData, WikiEntry};
pub use msg::Msg;
pub use pipeline::{PipelineAnimator, PipelineTiming, ProcessingStep, StepStatus, STAGE_COUNT};
pub use state::{AppState, BrowsingSession, ProcessingRun, Screen, ViewMode};
pub use update::update;
pub use view_model::{
    AppViewModel, ArticleView, BrowsingView, EntryCardView, EntryLinkView, ProcessingView,
    ScreenView, CARD_TAG_LIMIT,
};
