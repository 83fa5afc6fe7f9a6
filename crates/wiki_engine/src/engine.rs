use std::collections::HashMap;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use wiki_core::RunId;
use wiki_logging::{wiki_debug, wiki_error};

use crate::generate::{ChannelProgressSink, GeminiGenerator, Generator, ProgressSink};
use crate::timer::{run_pipeline_ticker, run_settle_timer};
use crate::{EngineEvent, GenerationSettings};

enum EngineCommand {
    Generate { run_id: RunId, channel: String },
    StartTicker { run_id: RunId, interval: Duration },
    StopTicker { run_id: RunId },
    Settle { run_id: RunId, delay: Duration },
}

/// Runs generation calls and timers on a background tokio runtime and hands
/// their results back as [`EngineEvent`]s.
///
/// Clones share one command queue and one event stream. Dropping the last
/// clone shuts the runtime down; in-flight work is abandoned.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: GenerationSettings) -> Self {
        Self::with_generator(Arc::new(GeminiGenerator::new(settings)))
    }

    pub fn with_generator(generator: Arc<dyn Generator>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    wiki_error!("Failed to start engine runtime: {}", err);
                    return;
                }
            };
            let sink: Arc<dyn ProgressSink> = Arc::new(ChannelProgressSink::new(event_tx));
            let mut tickers: HashMap<RunId, CancellationToken> = HashMap::new();

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Generate { run_id, channel } => {
                        let generator = generator.clone();
                        let sink = sink.clone();
                        runtime.spawn(async move {
                            let result = generator.generate(run_id, &channel, sink.as_ref()).await;
                            sink.emit(EngineEvent::GenerationCompleted { run_id, result });
                        });
                    }
                    EngineCommand::StartTicker { run_id, interval } => {
                        let token = CancellationToken::new();
                        if let Some(previous) = tickers.insert(run_id, token.clone()) {
                            previous.cancel();
                        }
                        runtime.spawn(run_pipeline_ticker(run_id, interval, token, sink.clone()));
                    }
                    EngineCommand::StopTicker { run_id } => {
                        if let Some(token) = tickers.remove(&run_id) {
                            token.cancel();
                        }
                    }
                    EngineCommand::Settle { run_id, delay } => {
                        runtime.spawn(run_settle_timer(run_id, delay, sink.clone()));
                    }
                }
            }

            wiki_debug!("Engine command channel closed; shutting down");
            for token in tickers.into_values() {
                token.cancel();
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    /// Issue the single generation request for a run.
    pub fn generate(&self, run_id: RunId, channel: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Generate {
            run_id,
            channel: channel.into(),
        });
    }

    pub fn start_ticker(&self, run_id: RunId, interval: Duration) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::StartTicker { run_id, interval });
    }

    pub fn stop_ticker(&self, run_id: RunId) {
        let _ = self.cmd_tx.send(EngineCommand::StopTicker { run_id });
    }

    pub fn schedule_settle(&self, run_id: RunId, delay: Duration) {
        let _ = self.cmd_tx.send(EngineCommand::Settle { run_id, delay });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }
}
