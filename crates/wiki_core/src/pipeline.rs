//! Fixed-cadence presentational progress for a processing run.
//!
//! The animator is not driven by real generation progress. Each tick derives
//! a new [`PipelineAnimator`] from the previous one; the old value is never
//! mutated, so a reader holding a snapshot never observes a half-applied tick.

use std::time::Duration;

/// Number of stages shown while a channel is processed.
pub const STAGE_COUNT: usize = 5;

const STAGES: [(&str, &str); STAGE_COUNT] = [
    (
        "Channel Metadata Retrieval",
        "Querying YouTube Data API v3...",
    ),
    (
        "Content Extraction",
        "Fetching transcripts via Caption API...",
    ),
    (
        "Natural Language Processing",
        "Entity extraction & summarization (Google Cloud NLP)...",
    ),
    (
        "Data Consolidation",
        "Merging metadata with semantic analysis...",
    ),
    (
        "Encyclopaedia Publication",
        "Generating pages via MediaWiki Action API...",
    ),
];

/// Ordered so that `Pending < Active < Completed`; a stage only ever moves up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum StepStatus {
    #[default]
    Pending,
    Active,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingStep {
    pub id: u32,
    pub label: &'static str,
    pub details: &'static str,
    pub status: StepStatus,
}

impl ProcessingStep {
    fn promoted(&self, status: StepStatus) -> Self {
        Self {
            status: self.status.max(status),
            ..self.clone()
        }
    }
}

/// Timer settings for the processing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineTiming {
    /// Time between animator ticks. The first tick fires immediately.
    pub tick_interval: Duration,
    /// Pause between "both signals ready" and entering the browsing view.
    pub settle_delay: Duration,
}

impl Default for PipelineTiming {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(1200),
            settle_delay: Duration::from_millis(800),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineAnimator {
    steps: Vec<ProcessingStep>,
    cursor: usize,
}

impl Default for PipelineAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineAnimator {
    pub fn new() -> Self {
        let steps = STAGES
            .iter()
            .zip(1u32..)
            .map(|(&(label, details), id)| ProcessingStep {
                id,
                label,
                details,
                status: StepStatus::Pending,
            })
            .collect();
        Self { steps, cursor: 0 }
    }

    pub fn steps(&self) -> &[ProcessingStep] {
        &self.steps
    }

    /// Number of ticks applied so far.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The last stage is completed. No further tick changes anything.
    pub fn is_terminal(&self) -> bool {
        self.steps
            .last()
            .is_some_and(|step| step.status == StepStatus::Completed)
    }

    /// Applies one tick: the stage before the cursor completes and the stage
    /// at the cursor becomes active. Ticks past the terminal state return an
    /// unchanged copy.
    pub fn advance(&self) -> Self {
        if self.is_terminal() {
            return self.clone();
        }
        let index = self.cursor;
        let steps = self
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                if index > 0 && i == index - 1 {
                    step.promoted(StepStatus::Completed)
                } else if i == index {
                    step.promoted(StepStatus::Active)
                } else {
                    step.clone()
                }
            })
            .collect();
        Self {
            steps,
            cursor: index + 1,
        }
    }
}
