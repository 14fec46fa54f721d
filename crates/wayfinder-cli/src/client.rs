//! HTTP client for the wayfinder server API.

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

use wayfinder_core::{Language, Path, TravelMode};

/// Session state as returned by the server.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub id: String,
    pub phase: Value,
    pub language: Language,
    pub current_step: usize,
    pub path: Option<Path>,
    pub advice: Option<StepAdvice>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepAdvice {
    pub step_index: usize,
    pub tip: String,
    pub caution: String,
}

/// HTTP client for driving a navigation session.
pub struct WayfinderClient {
    client: Client,
    base_url: String,
    session_id: Option<String>,
}

impl WayfinderClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            session_id: None,
        }
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    fn require_session(&self) -> Result<&str> {
        self.session_id
            .as_deref()
            .context("no session; call create_session first")
    }

    async fn parse(response: reqwest::Response) -> Result<SessionSnapshot> {
        let status = response.status();
        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or_default();
            bail!(
                "server returned {}: {}",
                status,
                body["error"].as_str().unwrap_or("unknown error")
            );
        }
        response.json().await.context("parse session response")
    }

    /// Open a new session on the server.
    pub async fn create_session(&mut self) -> Result<SessionSnapshot> {
        let response = self
            .client
            .post(format!("{}/v1/sessions", self.base_url))
            .send()
            .await
            .context("create session")?;
        let session = Self::parse(response).await?;
        self.session_id = Some(session.id.clone());
        Ok(session)
    }

    pub async fn get_session(&self) -> Result<SessionSnapshot> {
        let id = self.require_session()?;
        let response = self
            .client
            .get(format!("{}/v1/sessions/{}", self.base_url, id))
            .send()
            .await
            .context("get session")?;
        Self::parse(response).await
    }

    pub async fn plan(
        &self,
        airport_id: &str,
        start_id: &str,
        end_id: &str,
        mode: TravelMode,
        language: Language,
    ) -> Result<SessionSnapshot> {
        let id = self.require_session()?;
        let response = self
            .client
            .post(format!("{}/v1/sessions/{}/plan", self.base_url, id))
            .json(&json!({
                "airport_id": airport_id,
                "start_id": start_id,
                "end_id": end_id,
                "mode": mode,
                "language": language,
            }))
            .send()
            .await
            .context("plan route")?;
        Self::parse(response).await
    }

    pub async fn set_language(&self, language: Language) -> Result<SessionSnapshot> {
        let id = self.require_session()?;
        let response = self
            .client
            .post(format!("{}/v1/sessions/{}/language", self.base_url, id))
            .json(&json!({ "language": language }))
            .send()
            .await
            .context("set language")?;
        Self::parse(response).await
    }

    pub async fn step(&self, direction: &str) -> Result<SessionSnapshot> {
        let id = self.require_session()?;
        let response = self
            .client
            .post(format!("{}/v1/sessions/{}/step", self.base_url, id))
            .json(&json!({ "direction": direction }))
            .send()
            .await
            .context("change step")?;
        Self::parse(response).await
    }

    pub async fn set_emergency(&self, active: bool) -> Result<SessionSnapshot> {
        let id = self.require_session()?;
        let response = self
            .client
            .post(format!("{}/v1/sessions/{}/emergency", self.base_url, id))
            .json(&json!({ "active": active }))
            .send()
            .await
            .context("toggle emergency")?;
        Self::parse(response).await
    }

    /// Ask the server to narrate the current step. Returns whether the
    /// narrator is speaking afterwards.
    pub async fn narrate(&self, action: &str) -> Result<bool> {
        let id = self.require_session()?;
        let response = self
            .client
            .post(format!("{}/v1/sessions/{}/narrate", self.base_url, id))
            .json(&json!({ "action": action }))
            .send()
            .await
            .context("narrate")?;
        let status = response.status();
        if !status.is_success() {
            bail!("server returned {}", status);
        }
        let body: Value = response.json().await.context("parse narrate response")?;
        Ok(body["speaking"].as_bool().unwrap_or(false))
    }
}
