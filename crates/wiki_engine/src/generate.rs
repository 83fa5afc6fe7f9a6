use futures_util::StreamExt;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use wiki_core::{RunId, WikiData};
use wiki_logging::{wiki_debug, wiki_error, wiki_info};

use crate::config::{GenerationConfig, GenerationSettings};
use crate::postprocess::into_wiki_data;
use crate::prompt::build_prompt;
use crate::schema::{wiki_data_schema, RawWikiData};
use crate::{ConfigError, EngineEvent, GenerationError};

const API_KEY_HEADER: &str = "x-goog-api-key";
const RESPONSE_MIME_TYPE: &str = "application/json";

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelProgressSink {
    tx: std::sync::mpsc::Sender<EngineEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: std::sync::mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    /// Produce the dataset for `channel` with a single request.
    ///
    /// Emits [`EngineEvent::GenerationDispatched`] once configuration has
    /// been validated and the request is about to go out. A configuration
    /// failure returns before that event and before any network activity.
    async fn generate(
        &self,
        run_id: RunId,
        channel: &str,
        sink: &dyn ProgressSink,
    ) -> Result<WikiData, GenerationError>;
}

#[derive(Debug, Clone)]
pub struct GeminiGenerator {
    settings: GenerationSettings,
}

impl GeminiGenerator {
    pub fn new(settings: GenerationSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, GenerationError> {
        let mut builder = reqwest::Client::builder().connect_timeout(self.settings.connect_timeout);
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| GenerationError::transport(None, err.to_string()))
    }

    fn request_body<'a>(&self, prompt: &'a str) -> GenerateContentRequest<'a> {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationParameters {
                response_mime_type: RESPONSE_MIME_TYPE,
                response_schema: wiki_data_schema(),
                temperature: self.settings.temperature,
            },
        }
    }

    async fn request(
        &self,
        run_id: RunId,
        channel: &str,
        sink: &dyn ProgressSink,
    ) -> Result<WikiData, GenerationError> {
        let config: GenerationConfig = (self.settings.config)()?;
        let api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| GenerationError::Configuration(ConfigError::InvalidApiKey))?;
        let client = self.build_client()?;

        let prompt = build_prompt(channel, self.settings.entry_count);
        let body = serde_json::to_vec(&self.request_body(&prompt))
            .map_err(|err| GenerationError::content(format!("failed to encode request: {err}")))?;

        sink.emit(EngineEvent::GenerationDispatched { run_id });
        wiki_info!(
            "Generation run {} dispatched to model {} for channel_len={}",
            run_id,
            config.model,
            channel.len()
        );

        let response = client
            .post(config.endpoint())
            .header(API_KEY_HEADER, api_key)
            .header(CONTENT_TYPE, HeaderValue::from_static(RESPONSE_MIME_TYPE))
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GenerationError::transport(
                Some(status.as_u16()),
                format!("{status}: {}", truncate(&detail, 512)),
            ));
        }

        let bytes = self.read_body(response).await?;
        let envelope: GenerateContentResponse = serde_json::from_slice(&bytes)
            .map_err(|err| GenerationError::content(format!("malformed envelope: {err}")))?;
        let text = envelope.text();
        if text.trim().is_empty() {
            return Err(GenerationError::content("empty response from generator"));
        }
        wiki_debug!("Generation run {} received {} bytes of text", run_id, text.len());

        let raw: RawWikiData = serde_json::from_str(&text)
            .map_err(|err| GenerationError::content(format!("response violates schema: {err}")))?;
        Ok(into_wiki_data(raw, channel, (self.settings.clock)()))
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, GenerationError> {
        let max_bytes = self.settings.max_response_bytes;
        if let Some(len) = response.content_length() {
            if len > max_bytes {
                return Err(GenerationError::content(format!(
                    "response too large (max {max_bytes}, actual {len})"
                )));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(GenerationError::content(format!(
                    "response too large (max {max_bytes}, actual {next_len})"
                )));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl Generator for GeminiGenerator {
    async fn generate(
        &self,
        run_id: RunId,
        channel: &str,
        sink: &dyn ProgressSink,
    ) -> Result<WikiData, GenerationError> {
        let result = self.request(run_id, channel, sink).await;
        match &result {
            Ok(data) => wiki_info!(
                "Generation run {} produced {} entries",
                run_id,
                data.total_videos
            ),
            Err(err) => wiki_error!(
                "Generation run {} failed ({}): {}",
                run_id,
                err.kind(),
                err
            ),
        }
        result
    }
}

fn map_reqwest_error(err: reqwest::Error) -> GenerationError {
    let status = err.status().map(|status| status.as_u16());
    if err.is_timeout() {
        return GenerationError::transport(status, format!("timeout: {err}"));
    }
    GenerationError::transport(status, err.to_string())
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationParameters,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationParameters {
    response_mime_type: &'static str,
    response_schema: Value,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts concatenated.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}
