//! Image generation client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::domain::{AppError, GenerationApiConfig};
use crate::ports::{GeneratedImage, GenerationClient, GenerationRequest};

/// HTTP client for the image edit endpoint.
#[derive(Debug, Clone)]
pub struct HttpGenerationClient {
    api_url: Url,
    client: Client,
}

impl HttpGenerationClient {
    pub fn new(config: &GenerationApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_url: config.api_url.clone(), client })
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    image_url: &'a str,
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    negative_prompt: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    storage_info: Option<StorageInfo>,
}

#[derive(Debug, Deserialize)]
struct StorageInfo {
    #[serde(default)]
    uploaded: bool,
    #[serde(default)]
    url: Option<String>,
}

impl GenerationClient for HttpGenerationClient {
    fn generate(&self, request: GenerationRequest) -> Result<GeneratedImage, AppError> {
        let body = ApiRequest {
            image_url: &request.image_url,
            prompt: &request.prompt,
            negative_prompt: request.negative_prompt.as_deref(),
        };
        debug!(
            url = %self.api_url,
            prompt_len = request.prompt.len(),
            "sending generation request"
        );

        let response = self
            .client
            .post(self.api_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .map_err(|e| AppError::Generation(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "generation request rejected");
            return Err(AppError::GenerationRejected {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let api_response: ApiResponse = response
            .json()
            .map_err(|e| AppError::Generation(format!("Failed to parse response: {}", e)))?;

        match api_response.storage_info {
            Some(StorageInfo { uploaded: true, url: Some(url) }) if !url.trim().is_empty() => {
                Ok(GeneratedImage { url: strip_query(&url).to_string() })
            }
            _ => Err(AppError::Generation("No image URL received from the API".into())),
        }
    }
}

fn strip_query(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}
