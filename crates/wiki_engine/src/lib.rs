//! Channelwiki engine: generation client, schema contract and pipeline timers.
mod config;
mod engine;
mod error;
mod generate;
mod postprocess;
mod prompt;
pub mod schema;
mod timer;
mod types;

pub use config::{
    Clock, ConfigSource, GenerationConfig, GenerationSettings, API_KEY_FALLBACK_VAR, API_KEY_VAR,
    BASE_URL_VAR, DEFAULT_BASE_URL, DEFAULT_MODEL, MODEL_VAR,
};
pub use engine::EngineHandle;
pub use error::{ConfigError, GenerationError, GENERIC_FAILURE_MESSAGE};
pub use generate::{ChannelProgressSink, GeminiGenerator, Generator, ProgressSink};
pub use postprocess::into_wiki_data;
pub use prompt::build_prompt;
pub use timer::{run_pipeline_ticker, run_settle_timer};
pub use types::{EngineEvent, FailureKind};
