use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;
use serde::{Deserialize, Serialize};

use super::session::GesturePoint;
use crate::error::AssistError;

/// Wire body for `POST /getData`, matching the suggestion service exactly
/// (including the service's `sentense` spelling).
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionRequest {
    pub width: f32,
    pub height: f32,
    pub points_x: Vec<f32>,
    pub points_y: Vec<f32>,
    pub all_points_x: Vec<f32>,
    pub all_points_y: Vec<f32>,
    pub keys: Vec<String>,
    /// Submission time, epoch milliseconds.
    pub time: u64,
    pub sentense: String,
}

impl SuggestionRequest {
    pub fn new(width: f32, height: f32, points: &[GesturePoint]) -> Self {
        let xs: Vec<f32> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f32> = points.iter().map(|p| p.y).collect();
        Self {
            width,
            height,
            points_x: xs.clone(),
            points_y: ys.clone(),
            all_points_x: xs,
            all_points_y: ys,
            keys: Vec::new(),
            time: epoch_millis(),
            sentense: String::new(),
        }
    }
}

fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[derive(Debug, Deserialize)]
struct SuggestionResponse {
    #[serde(rename = "suggestedWords", default)]
    suggested_words: Vec<String>,
}

/// Blocking client for the handwriting suggestion service.
///
/// One request per submit action, serialized by the caller; no retries and
/// no timeout beyond the transport's own. Any non-2xx status is a hard
/// failure for that request.
pub struct SuggestionClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl SuggestionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::blocking::Client::new(),
        }
    }

    pub fn fetch(&self, request: &SuggestionRequest) -> Result<Vec<String>, AssistError> {
        let url = format!("{}/getData", self.base_url.trim_end_matches('/'));
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                warn!("suggestion request failed: {}", e);
                AssistError::from(e)
            })?;
        let parsed: SuggestionResponse = response.json()?;
        Ok(parsed.suggested_words)
    }
}
