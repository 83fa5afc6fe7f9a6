use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use wiki_core::RunId;
use wiki_logging::wiki_debug;

use crate::{EngineEvent, ProgressSink};

/// Emit [`EngineEvent::PipelineTick`] immediately and then every `interval`
/// until `cancel` fires. Nothing is emitted after cancellation is observed.
pub async fn run_pipeline_ticker(
    run_id: RunId,
    interval: Duration,
    cancel: CancellationToken,
    sink: Arc<dyn ProgressSink>,
) {
    let mut ticks = tokio::time::interval(interval);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                wiki_debug!("Pipeline ticker for run {} cancelled", run_id);
                break;
            }
            _ = ticks.tick() => {
                if cancel.is_cancelled() {
                    break;
                }
                sink.emit(EngineEvent::PipelineTick { run_id });
            }
        }
    }
}

/// Emit [`EngineEvent::SettleElapsed`] once after `delay`.
pub async fn run_settle_timer(run_id: RunId, delay: Duration, sink: Arc<dyn ProgressSink>) {
    tokio::time::sleep(delay).await;
    sink.emit(EngineEvent::SettleElapsed { run_id });
}
