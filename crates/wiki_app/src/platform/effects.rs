use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use wiki_core::{Effect, Msg};
use wiki_engine::{EngineEvent, EngineHandle, GenerationSettings};
use wiki_logging::{wiki_info, wiki_warn};

use super::app::AppInput;

/// Carries core effects out to the engine and engine events back in as
/// messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: GenerationSettings, input_tx: mpsc::Sender<AppInput>) -> Self {
        let runner = Self {
            engine: EngineHandle::new(settings),
        };
        runner.spawn_event_loop(input_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartGeneration { run_id, channel } => {
                    wiki_info!(
                        "StartGeneration run_id={} channel_len={}",
                        run_id,
                        channel.len()
                    );
                    self.engine.generate(run_id, channel);
                }
                Effect::StartPipelineTimer { run_id, interval } => {
                    self.engine.start_ticker(run_id, interval);
                }
                Effect::StopPipelineTimer { run_id } => {
                    self.engine.stop_ticker(run_id);
                }
                Effect::ScheduleSettle { run_id, delay } => {
                    self.engine.schedule_settle(run_id, delay);
                }
            }
        }
    }

    fn spawn_event_loop(&self, input_tx: mpsc::Sender<AppInput>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.recv_timeout(Duration::from_millis(250)) {
                if input_tx.send(AppInput::Msg(map_event(event))).is_err() {
                    break;
                }
            }
        });
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::GenerationDispatched { run_id } => Msg::GenerationDispatched { run_id },
        EngineEvent::GenerationCompleted { run_id, result } => match result {
            Ok(data) => Msg::GenerationSucceeded { run_id, data },
            Err(err) => {
                wiki_warn!("Run {} failed ({}): {}", run_id, err.kind(), err);
                Msg::GenerationFailed {
                    run_id,
                    message: err.user_message(),
                }
            }
        },
        EngineEvent::PipelineTick { run_id } => Msg::PipelineTick { run_id },
        EngineEvent::SettleElapsed { run_id } => Msg::SettleElapsed { run_id },
    }
}
