use std::time::Duration;

use crate::RunId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the single generation request for a run.
    StartGeneration { run_id: RunId, channel: String },
    /// Start the repeating animator timer; its first tick fires immediately.
    StartPipelineTimer { run_id: RunId, interval: Duration },
    /// Clear the animator timer. No tick for `run_id` may arrive afterwards.
    StopPipelineTimer { run_id: RunId },
    /// Report `Msg::SettleElapsed` once `delay` has passed.
    ScheduleSettle { run_id: RunId, delay: Duration },
}
