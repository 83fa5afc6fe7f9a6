use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use wiki_core::{RunId, WikiData};
use wiki_engine::{
    ConfigError, EngineEvent, EngineHandle, GenerationError, Generator, ProgressSink,
};

const WAIT: Duration = Duration::from_secs(5);

struct FixedGenerator;

#[async_trait]
impl Generator for FixedGenerator {
    async fn generate(
        &self,
        run_id: RunId,
        channel: &str,
        sink: &dyn ProgressSink,
    ) -> Result<WikiData, GenerationError> {
        sink.emit(EngineEvent::GenerationDispatched { run_id });
        Ok(WikiData::new(
            channel.to_string(),
            "A channel".to_string(),
            "1K".to_string(),
            Vec::new(),
        ))
    }
}

struct UnconfiguredGenerator;

#[async_trait]
impl Generator for UnconfiguredGenerator {
    async fn generate(
        &self,
        _run_id: RunId,
        _channel: &str,
        _sink: &dyn ProgressSink,
    ) -> Result<WikiData, GenerationError> {
        Err(ConfigError::MissingApiKey.into())
    }
}

#[test]
fn generation_result_is_delivered_after_dispatch() {
    let engine = EngineHandle::with_generator(Arc::new(FixedGenerator));
    engine.generate(4, "Veritasium");

    assert_eq!(
        engine.recv_timeout(WAIT),
        Some(EngineEvent::GenerationDispatched { run_id: 4 })
    );
    match engine.recv_timeout(WAIT) {
        Some(EngineEvent::GenerationCompleted { run_id, result }) => {
            assert_eq!(run_id, 4);
            assert_eq!(result.unwrap().channel_name, "Veritasium");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn configuration_failure_is_never_dispatched() {
    let engine = EngineHandle::with_generator(Arc::new(UnconfiguredGenerator));
    engine.generate(1, "Veritasium");

    match engine.recv_timeout(WAIT) {
        Some(EngineEvent::GenerationCompleted { run_id: 1, result }) => {
            assert_eq!(
                result.unwrap_err(),
                GenerationError::Configuration(ConfigError::MissingApiKey)
            );
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn stopped_ticker_goes_quiet() {
    let engine = EngineHandle::with_generator(Arc::new(FixedGenerator));
    engine.start_ticker(9, Duration::from_millis(10));

    assert_eq!(
        engine.recv_timeout(WAIT),
        Some(EngineEvent::PipelineTick { run_id: 9 })
    );
    engine.stop_ticker(9);
    std::thread::sleep(Duration::from_millis(50));
    while engine.try_recv().is_some() {}

    assert_eq!(engine.recv_timeout(Duration::from_millis(100)), None);
}

#[test]
fn settle_is_reported_once() {
    let engine = EngineHandle::with_generator(Arc::new(FixedGenerator));
    engine.schedule_settle(2, Duration::from_millis(20));

    assert_eq!(
        engine.recv_timeout(WAIT),
        Some(EngineEvent::SettleElapsed { run_id: 2 })
    );
    assert_eq!(engine.recv_timeout(Duration::from_millis(100)), None);
}
