//! Deterministic service fakes shared by the unit tests.

use std::io::Cursor;
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::config::AppConfig;
use crate::error::AutostockError;
use crate::service::{ImageGenerator, ImagePayload, TextGenerator};

/// An AppConfig pointed at a test directory.
pub fn test_config(save_dir: &Path) -> AppConfig {
    AppConfig {
        save_dir: save_dir.to_path_buf(),
        api_key: "test-key".to_string(),
        base_url: "https://api.invalid".to_string(),
        text_model: "test-text-model".to_string(),
        image_model: "test-image-model".to_string(),
        request_timeout: Duration::from_secs(5),
    }
}

/// PNG-encoded bytes of a blank image, for feeding the decode paths.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = image::DynamicImage::ImageRgb8(image::RgbImage::new(width, height));
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, image::ImageFormat::Png)
        .expect("encoding a blank PNG cannot fail");
    out.into_inner()
}

/// Text generator that replays canned responses in order.
pub struct FakeText {
    responses: Mutex<Vec<String>>,
    instructions: Mutex<Vec<String>>,
    fail: bool,
}

impl FakeText {
    /// Replays the given responses, first to last.
    pub fn with_responses(responses: &[&str]) -> Self {
        let mut queued: Vec<String> = responses.iter().map(|s| s.to_string()).collect();
        queued.reverse();
        Self {
            responses: Mutex::new(queued),
            instructions: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Fails every call with a transport-style error.
    pub fn failing() -> Self {
        Self {
            responses: Mutex::new(Vec::new()),
            instructions: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// The most recent instruction received.
    pub fn last_instruction(&self) -> String {
        self.instructions
            .lock()
            .expect("instruction lock poisoned")
            .last()
            .cloned()
            .unwrap_or_default()
    }
}

impl TextGenerator for FakeText {
    async fn generate_text(&self, instruction: &str) -> Result<String, AutostockError> {
        self.instructions
            .lock()
            .expect("instruction lock poisoned")
            .push(instruction.to_string());
        if self.fail {
            return Err(AutostockError::Api("fake text failure".to_string()));
        }
        self.responses
            .lock()
            .expect("response lock poisoned")
            .pop()
            .ok_or_else(|| AutostockError::Api("fake ran out of responses".to_string()))
    }
}

/// Image generator returning a fixed payload and canned remote bytes.
pub struct FakeImages {
    payload: ImagePayload,
    remote_bytes: Option<Vec<u8>>,
    fail_generate: bool,
    generate_calls: AtomicUsize,
    fetch_calls: AtomicUsize,
}

impl FakeImages {
    /// Answers every synthesis call with the given payload.
    pub fn with_payload(payload: ImagePayload) -> Self {
        Self {
            payload,
            remote_bytes: None,
            fail_generate: false,
            generate_calls: AtomicUsize::new(0),
            fetch_calls: AtomicUsize::new(0),
        }
    }

    /// Fails the synthesis call itself.
    pub fn failing() -> Self {
        Self {
            fail_generate: true,
            ..Self::with_payload(ImagePayload::default())
        }
    }

    /// Bytes served for any remote fetch.
    pub fn with_remote_bytes(mut self, bytes: Vec<u8>) -> Self {
        self.remote_bytes = Some(bytes);
        self
    }

    /// The payload this fake serves.
    pub fn payload(&self) -> &ImagePayload {
        &self.payload
    }

    /// How many synthesis calls were made.
    pub fn generate_calls(&self) -> usize {
        self.generate_calls.load(Ordering::Relaxed)
    }

    /// How many remote fetches were made.
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::Relaxed)
    }
}

impl ImageGenerator for FakeImages {
    async fn generate_image(&self, _prompt: &str) -> Result<ImagePayload, AutostockError> {
        self.generate_calls.fetch_add(1, Ordering::Relaxed);
        if self.fail_generate {
            return Err(AutostockError::Api("fake image failure".to_string()));
        }
        Ok(self.payload.clone())
    }

    async fn fetch_remote(&self, _url: &str) -> Result<Vec<u8>, AutostockError> {
        self.fetch_calls.fetch_add(1, Ordering::Relaxed);
        self.remote_bytes
            .clone()
            .ok_or_else(|| AutostockError::Api("fake fetch failure".to_string()))
    }
}
