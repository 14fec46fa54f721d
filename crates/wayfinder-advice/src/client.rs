//! Spatial-advice API HTTP client.
//!
//! Talks to an external language-model service that produces a per-step
//! tip/caution pair. Every failure path is masked by the static fallback
//! table; callers of the `*_or_fallback` methods never see an error.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use wayfinder_core::{fallback_advice, fallback_instructions, Language, SpatialAdvice};

/// HTTP client for the advice service.
pub struct AdviceClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct AdviceRequest<'a> {
    /// Instruction text of the step the traveler is currently on.
    instruction: &'a str,
    /// Destination name of the active route.
    destination: &'a str,
    /// Language the response must be written in.
    language: &'a str,
}

#[derive(Debug, Deserialize)]
struct AdviceResponse {
    tip: String,
    caution: String,
}

#[derive(Debug, Serialize)]
struct InstructionsRequest<'a> {
    start: &'a str,
    end: &'a str,
    language: &'a str,
}

#[derive(Debug, Deserialize)]
struct InstructionsResponse {
    steps: Vec<String>,
}

impl AdviceClient {
    /// Create a new advice client. An empty API key means unauthenticated.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let api_key = if api_key.trim().is_empty() {
            None
        } else {
            Some(api_key)
        };
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
            api_key,
        }
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.api_key.as_deref() {
            Some(key) => request.header("Authorization", format!("Bearer {}", key)),
            None => request,
        }
    }

    /// Fetch a tip/caution pair for the current step, in the given language.
    pub async fn fetch_advice(
        &self,
        instruction: &str,
        destination: &str,
        language: Language,
    ) -> Result<SpatialAdvice> {
        let url = format!("{}/v1/spatial-advice", self.base_url);
        let request = AdviceRequest {
            instruction,
            destination,
            language: language.english_name(),
        };

        let response = self
            .apply_auth(
                self.client
                    .post(&url)
                    .header("Content-Type", "application/json")
                    .json(&request),
            )
            .send()
            .await
            .context("Failed to send advice request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Advice request failed: {} {}", status, body));
        }

        let payload = response
            .json::<AdviceResponse>()
            .await
            .context("Failed to parse advice response")?;

        if payload.tip.trim().is_empty() || payload.caution.trim().is_empty() {
            return Err(anyhow::anyhow!("Advice response missing tip or caution"));
        }

        Ok(SpatialAdvice {
            tip: payload.tip,
            caution: payload.caution,
        })
    }

    /// Fetch advice, substituting the static per-language pair on any
    /// failure. Never retries and never surfaces the error.
    pub async fn advice_or_fallback(
        &self,
        instruction: &str,
        destination: &str,
        language: Language,
    ) -> SpatialAdvice {
        match self.fetch_advice(instruction, destination, language).await {
            Ok(advice) => advice,
            Err(err) => {
                tracing::warn!("Advice source unavailable, using fallback: {err:#}");
                fallback_advice(language)
            }
        }
    }

    /// Fetch a short dynamic instruction list for a journey.
    pub async fn fetch_dynamic_instructions(
        &self,
        start: &str,
        end: &str,
        language: Language,
    ) -> Result<Vec<String>> {
        let url = format!("{}/v1/dynamic-instructions", self.base_url);
        let request = InstructionsRequest {
            start,
            end,
            language: language.english_name(),
        };

        let response = self
            .apply_auth(
                self.client
                    .post(&url)
                    .header("Content-Type", "application/json")
                    .json(&request),
            )
            .send()
            .await
            .context("Failed to send instructions request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "Instructions request failed: {} {}",
                status,
                body
            ));
        }

        let payload = response
            .json::<InstructionsResponse>()
            .await
            .context("Failed to parse instructions response")?;

        if payload.steps.is_empty() {
            return Err(anyhow::anyhow!("Instructions response contained no steps"));
        }

        Ok(payload.steps)
    }

    /// Dynamic instructions with the localized three-step fallback.
    pub async fn instructions_or_fallback(
        &self,
        start: &str,
        end: &str,
        language: Language,
    ) -> Vec<String> {
        match self.fetch_dynamic_instructions(start, end, language).await {
            Ok(steps) => steps,
            Err(err) => {
                tracing::warn!("Instruction source unavailable, using fallback: {err:#}");
                fallback_instructions(start, end, language)
            }
        }
    }
}
