//! Ledger document stored as a file in a GitHub repository, accessed through the
//! contents API (`GET`/`PUT /repos/{repo}/contents/{path}`).

use super::{Ledger, LedgerSnapshot, LedgerStore, RevisionToken, WriteStatus};
use crate::constants::{LEDGER_COMMIT_MESSAGE, LEDGER_HTTP_TIMEOUT};
use crate::error::LedgerError;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

#[derive(Deserialize)]
struct ContentsResponse {
    content: String,
    sha: String,
}

#[derive(Serialize)]
struct PutContents<'a> {
    message: &'a str,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

pub struct GithubLedgerStore {
    http: reqwest::Client,
    url: String,
    token: String,
}

impl GithubLedgerStore {
    pub fn new(
        api_base: &str,
        repo: &str,
        path: &str,
        token: impl Into<String>,
    ) -> Result<Self, LedgerError> {
        // The API refuses requests without a User-Agent.
        let http = reqwest::Client::builder()
            .timeout(LEDGER_HTTP_TIMEOUT)
            .user_agent(concat!("wagerbot/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let url = format!(
            "{}/repos/{}/contents/{}",
            api_base.trim_end_matches('/'),
            repo.trim_matches('/'),
            path.trim_start_matches('/')
        );
        Ok(Self {
            http,
            url,
            token: token.into(),
        })
    }

    pub fn contents_url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl LedgerStore for GithubLedgerStore {
    async fn read(&self) -> Result<LedgerSnapshot, LedgerError> {
        let response = self
            .http
            .get(&self.url)
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            warn!(target = "ledger", url = %self.url, status = %response.status(), "ledger read failed, treating as empty");
            return Ok(LedgerSnapshot::default());
        }

        let body: ContentsResponse = response.json().await?;
        let ledger = decode_content(&body.content)?;
        debug!(target = "ledger", entries = ledger.len(), sha = %body.sha, "ledger read");
        Ok(LedgerSnapshot {
            ledger,
            revision: Some(RevisionToken::new(body.sha)),
        })
    }

    async fn write(
        &self,
        ledger: &Ledger,
        revision: Option<&RevisionToken>,
    ) -> Result<WriteStatus, LedgerError> {
        let body = PutContents {
            message: LEDGER_COMMIT_MESSAGE,
            content: encode_content(ledger)?,
            sha: revision.map(RevisionToken::as_str),
        };
        let response = self
            .http
            .put(&self.url)
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .json(&body)
            .send()
            .await?;
        Ok(WriteStatus(response.status().as_u16()))
    }
}

/// Decodes the `content` field of a contents response. The API wraps the
/// base64 text with newlines.
pub fn decode_content(encoded: &str) -> Result<Ledger, LedgerError> {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = STANDARD.decode(compact)?;
    Ledger::from_json_str(&String::from_utf8(bytes)?)
}

pub fn encode_content(ledger: &Ledger) -> Result<String, LedgerError> {
    Ok(STANDARD.encode(ledger.to_json_pretty()?))
}
