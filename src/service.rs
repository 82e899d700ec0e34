//! Generation-service boundary.
//!
//! The pipeline only needs two narrow capabilities: turn an instruction
//! into text, and turn a prompt into image data. Both are traits so tests
//! can substitute deterministic fakes without network access.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::AppConfig;
use crate::constants::{IMAGE_COUNT, IMAGE_STEPS, SERVICE_IMAGE_SIZE};
use crate::error::AutostockError;

/// Raw result of one image synthesis call. The service may answer with an
/// inline base64 payload, a remote URL, both, or neither; downstream code
/// must not trust either field to be present.
#[derive(Clone, Debug, Default)]
pub struct ImagePayload {
    /// Base64-encoded image bytes, when delivered inline.
    pub b64_json: Option<String>,
    /// URL the image can be fetched from, when delivered as a link.
    pub url: Option<String>,
}

/// Single-turn text generation.
#[allow(async_fn_in_trait)]
pub trait TextGenerator {
    /// Sends one user message and returns the complete response text.
    async fn generate_text(&self, instruction: &str) -> Result<String, AutostockError>;
}

/// Single-shot image synthesis plus the fallback fetch for link-shaped
/// responses.
#[allow(async_fn_in_trait)]
pub trait ImageGenerator {
    /// Requests one image for the prompt.
    async fn generate_image(&self, prompt: &str) -> Result<ImagePayload, AutostockError>;

    /// Downloads image bytes when the service answered with a URL.
    async fn fetch_remote(&self, url: &str) -> Result<Vec<u8>, AutostockError>;
}

#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize, Debug)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    #[serde(default)]
    error: Option<Value>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize, Debug)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Serialize, Debug)]
struct ImagesRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    steps: u32,
    n: u32,
    width: u32,
    height: u32,
}

#[derive(Deserialize, Debug)]
struct ImagesResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

#[derive(Deserialize, Debug)]
struct ImageData {
    #[serde(default)]
    b64_json: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

/// Client for the Together AI chat-completions and image-generations
/// endpoints. One instance is built at startup and shared by every stage.
pub struct TogetherClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    text_model: String,
    image_model: String,
}

impl TogetherClient {
    /// Builds the client with the configured per-request timeout.
    pub fn new(config: &AppConfig) -> Result<Self, AutostockError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
        })
    }
}

impl TextGenerator for TogetherClient {
    async fn generate_text(&self, instruction: &str) -> Result<String, AutostockError> {
        let req_body = ChatRequest {
            model: &self.text_model,
            messages: [ChatMessage {
                role: "user",
                content: instruction,
            }],
        };

        let resp = self
            .http
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&req_body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AutostockError::Api(format!(
                "chat completion returned {status}: {body}"
            )));
        }

        let parsed: ChatResponse = resp.json().await?;
        if let Some(err) = parsed.error {
            return Err(AutostockError::Api(format!(
                "chat completion returned error: {err}"
            )));
        }

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AutostockError::Api("chat completion had no choices".to_string()))
    }
}

impl ImageGenerator for TogetherClient {
    async fn generate_image(&self, prompt: &str) -> Result<ImagePayload, AutostockError> {
        let req_body = ImagesRequest {
            model: &self.image_model,
            prompt,
            steps: IMAGE_STEPS,
            n: IMAGE_COUNT,
            width: SERVICE_IMAGE_SIZE,
            height: SERVICE_IMAGE_SIZE,
        };

        let resp = self
            .http
            .post(format!("{}/v1/images/generations", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&req_body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AutostockError::Api(format!(
                "image generation returned {status}: {body}"
            )));
        }

        let parsed: ImagesResponse = resp.json().await?;
        let first = parsed
            .data
            .into_iter()
            .next()
            .ok_or_else(|| AutostockError::Api("no image data returned".to_string()))?;

        debug!(
            "Image response shape: inline={}, url={}",
            first.b64_json.is_some(),
            first.url.is_some()
        );
        Ok(ImagePayload {
            b64_json: first.b64_json,
            url: first.url,
        })
    }

    async fn fetch_remote(&self, url: &str) -> Result<Vec<u8>, AutostockError> {
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(AutostockError::Api(format!(
                "image download returned {status}"
            )));
        }
        Ok(resp.bytes().await?.to_vec())
    }
}
