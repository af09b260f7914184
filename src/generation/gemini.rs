//! Gemini `generateContent` client
//!
//! Sends one instruction with a structured-output schema and extracts the
//! `captions` array from the model's JSON text. Works with any endpoint
//! speaking the Generative Language REST API, which is how the tests point
//! it at a local stub.

use super::credentials::ApiKeySource;
use super::error::GenerationError;
use super::prompt::{build_prompt, response_schema};
use crate::session::Tone;
use serde::Deserialize;
use serde_json::{json, Value};

/// Default API base for the Generative Language API
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Client for caption generation
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_base: String,
    model: String,
    credentials: ApiKeySource,
}

impl GeminiClient {
    /// Create a client
    ///
    /// No timeout is set: a request runs until the API answers or the
    /// connection fails.
    pub fn new(
        api_base: impl Into<String>,
        model: impl Into<String>,
        credentials: ApiKeySource,
    ) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| GenerationError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_base: api_base.into(),
            model: model.into(),
            credentials,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }

    /// Generate captions for a product
    ///
    /// Fails before any network activity when no API key resolves. Captions
    /// come back exactly as the model returned them, in order.
    pub async fn generate(
        &self,
        product_name: &str,
        features: &str,
        tone: Tone,
    ) -> Result<Vec<String>, GenerationError> {
        let api_key = self
            .credentials
            .resolve()
            .ok_or(GenerationError::MissingApiKey)?;

        let body = json!({
            "contents": [{
                "parts": [{ "text": build_prompt(product_name, features, tone) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
            }
        });

        tracing::debug!(model = %self.model, %tone, "Sending generateContent request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        parse_captions(&body.text())
    }
}

/// Extract the `captions` string array from the model's JSON text
///
/// Empty text is treated as `{}`, so it fails on the missing field.
pub fn parse_captions(text: &str) -> Result<Vec<String>, GenerationError> {
    let text = if text.trim().is_empty() { "{}" } else { text };

    let value: Value = serde_json::from_str(text)
        .map_err(|e| GenerationError::Format(format!("Response is not JSON: {}", e)))?;

    let captions = value
        .get("captions")
        .ok_or_else(|| GenerationError::Format("Missing 'captions' field".to_string()))?
        .as_array()
        .ok_or_else(|| GenerationError::Format("'captions' is not an array".to_string()))?;

    captions
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                GenerationError::Format(format!("Caption {} is not a string", i + 1))
            })
        })
        .collect()
}

/// generateContent response (only the fields we read)
#[derive(Debug, Deserialize, Default)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::ErrorKind;
    use axum::http::{HeaderMap, StatusCode, Uri};
    use axum::{Json, Router};
    use std::sync::{Arc, Mutex};

    /// Requests seen by the stub: (path, api key header)
    type Seen = Arc<Mutex<Vec<(String, Option<String>)>>>;

    /// Serve `body` with `status` for every request on a throwaway port
    async fn spawn_stub(status: StatusCode, body: Value) -> (String, Seen) {
        let seen: Seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = seen.clone();

        let app = Router::new().fallback(move |uri: Uri, headers: HeaderMap| {
            let recorder = recorder.clone();
            let body = body.clone();
            async move {
                let key = headers
                    .get("x-goog-api-key")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                recorder.lock().unwrap().push((uri.path().to_string(), key));
                (status, Json(body))
            }
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}/v1beta", addr), seen)
    }

    /// Wrap model text the way generateContent does
    fn model_reply(text: &str) -> Value {
        json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        })
    }

    fn client(base: &str, key: Option<&str>) -> GeminiClient {
        GeminiClient::new(base, DEFAULT_MODEL, ApiKeySource::fixed(key)).unwrap()
    }

    #[tokio::test]
    async fn returns_captions_in_order() {
        let reply = model_reply(r#"{"captions":["a","b","c","d","e"]}"#);
        let (base, seen) = spawn_stub(StatusCode::OK, reply).await;

        let captions = client(&base, Some("test-key"))
            .generate("Lip Balm", "fiery", Tone::Extra)
            .await
            .unwrap();

        assert_eq!(captions, vec!["a", "b", "c", "d", "e"]);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0].0,
            format!("/v1beta/models/{}:generateContent", DEFAULT_MODEL)
        );
        assert_eq!(seen[0].1.as_deref(), Some("test-key"));
    }

    #[tokio::test]
    async fn missing_key_sends_nothing() {
        let (base, seen) = spawn_stub(StatusCode::OK, model_reply("{}")).await;

        let err = client(&base, None)
            .generate("Lip Balm", "fiery", Tone::Chill)
            .await
            .unwrap_err();

        assert_eq!(err, GenerationError::MissingApiKey);
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn non_array_captions_is_format_error() {
        let reply = model_reply(r#"{"captions":"not-an-array"}"#);
        let (base, _) = spawn_stub(StatusCode::OK, reply).await;

        let err = client(&base, Some("k"))
            .generate("Lip Balm", "fiery", Tone::Witty)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[tokio::test]
    async fn empty_object_is_format_error() {
        let (base, _) = spawn_stub(StatusCode::OK, model_reply("{}")).await;

        let err = client(&base, Some("k"))
            .generate("Lip Balm", "fiery", Tone::Sassy)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            GenerationError::Format("Missing 'captions' field".to_string())
        );
    }

    #[tokio::test]
    async fn http_error_is_transport_failure() {
        let body = json!({ "error": { "code": 403, "message": "API key not valid" } });
        let (base, _) = spawn_stub(StatusCode::FORBIDDEN, body).await;

        let err = client(&base, Some("bad"))
            .generate("Lip Balm", "fiery", Tone::Extra)
            .await
            .unwrap_err();

        match err {
            GenerationError::Api { status, ref message } => {
                assert_eq!(status, 403);
                assert!(message.contains("API key not valid"));
            }
            other => panic!("expected Api error, got {:?}", other),
        }
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{}", addr), Some("k"))
            .generate("Lip Balm", "fiery", Tone::Extra)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[test]
    fn parse_rejects_non_string_items() {
        let err = parse_captions(r#"{"captions":["ok", 3]}"#).unwrap_err();
        assert_eq!(
            err,
            GenerationError::Format("Caption 2 is not a string".to_string())
        );
    }

    #[test]
    fn parse_treats_blank_text_as_empty_object() {
        assert!(matches!(
            parse_captions("  "),
            Err(GenerationError::Format(_))
        ));
    }

    #[test]
    fn parse_rejects_prose() {
        assert!(matches!(
            parse_captions("Sure! Here are your captions:"),
            Err(GenerationError::Format(_))
        ));
    }

    #[test]
    fn response_text_joins_parts_of_first_candidate() {
        let body: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "{\"captions\":" }, { "text": "[\"x\"]}" }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(body.text(), r#"{"captions":["x"]}"#);
        assert_eq!(parse_captions(&body.text()).unwrap(), vec!["x"]);
    }
}
