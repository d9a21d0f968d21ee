//! Hosted-file backend: the document is a JSON file committed to a GitHub
//! repository via the Contents API.
//!
//! Every persist is a visible commit on the configured branch. The current
//! blob sha is re-read immediately before each write and supplied as the
//! API's concurrency guard; a conflicting write fails without retry.

use base64::prelude::*;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::{BackendAdapter, BackendError, ConfigError, FetchedDocument, PersistReceipt};
use crate::content::model::{PartialSiteContent, SiteContent};
use crate::session::Session;

const DEFAULT_API_BASE: &str = "https://api.github.com";
const DEFAULT_COMMIT_MESSAGE: &str = "chore(content): update site content";
const USER_AGENT: &str = concat!("jaipurtv-content/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct GitHubConfig {
    /// Personal access token with contents read/write on the repo.
    pub token: String,
    /// `owner/repo`.
    pub repo: String,
    pub branch: String,
    /// Repository path of the document file.
    pub content_path: String,
    pub commit_author_name: String,
    pub commit_author_email: String,
    /// API host; overridable for tests against a local stub.
    pub api_base: String,
}

impl GitHubConfig {
    pub fn new(token: String, repo: String) -> Self {
        Self {
            token,
            repo,
            branch: "main".to_string(),
            content_path: "content/site-content.json".to_string(),
            commit_author_name: "JaipurTV Bot".to_string(),
            commit_author_email: "bot@jaipurtv.in".to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

pub struct GitHubBackend {
    client: reqwest::Client,
    config: GitHubConfig,
    owner: String,
    repo_name: String,
}

#[derive(Debug, Deserialize)]
struct ContentsResponse {
    sha: String,
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct CommitIdentity<'a> {
    name: &'a str,
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct PutContentsRequest<'a> {
    message: &'a str,
    content: String,
    branch: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<String>,
    committer: CommitIdentity<'a>,
    author: CommitIdentity<'a>,
}

#[derive(Debug, Deserialize)]
struct PutContentsResponse {
    content: Option<PutContentInfo>,
    commit: PutCommitInfo,
}

#[derive(Debug, Deserialize)]
struct PutContentInfo {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct PutCommitInfo {
    html_url: Option<String>,
}

impl GitHubBackend {
    pub fn new(config: GitHubConfig) -> Result<Self, ConfigError> {
        let (owner, repo_name) = config
            .repo
            .split_once('/')
            .filter(|(owner, name)| !owner.is_empty() && !name.is_empty())
            .map(|(owner, name)| (owner.to_string(), name.to_string()))
            .ok_or_else(|| ConfigError::InvalidRepo(config.repo.clone()))?;

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            config,
            owner,
            repo_name,
        })
    }

    fn contents_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.config.api_base, self.owner, self.repo_name, self.config.content_path
        )
    }

    /// Read the file at the configured branch/path. `Ok(None)` on 404.
    async fn read_current(&self) -> Result<Option<ContentsResponse>, BackendError> {
        let response = self
            .client
            .get(self.contents_url())
            .query(&[("ref", self.config.branch.as_str())])
            .bearer_auth(&self.config.token)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(
                response.json().await.map_err(super::decode_error)?,
            )),
            status if status.is_server_error() => Err(BackendError::Unavailable(format!(
                "github contents read failed with {status}"
            ))),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(BackendError::Rejected(format!(
                    "github contents read failed with {status}: {body}"
                )))
            }
        }
    }

    fn decode_file(encoded: &str) -> Result<PartialSiteContent, BackendError> {
        // The API wraps base64 at 60 columns.
        let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = BASE64_STANDARD
            .decode(compact)
            .map_err(|e| BackendError::Serialization(format!("invalid base64 file body: {e}")))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait::async_trait]
impl BackendAdapter for GitHubBackend {
    async fn fetch_document(&self) -> Result<Option<FetchedDocument>, BackendError> {
        let Some(current) = self.read_current().await? else {
            return Ok(None);
        };
        let encoded = current.content.ok_or_else(|| {
            BackendError::Serialization("github response carried no file content".to_string())
        })?;
        let document = Self::decode_file(&encoded)?;
        Ok(Some(FetchedDocument {
            document,
            version: Some(current.sha),
        }))
    }

    async fn persist_document(
        &self,
        document: &SiteContent,
        session: &Session,
        message: Option<&str>,
    ) -> Result<PersistReceipt, BackendError> {
        let serialized = serde_json::to_string_pretty(document)?;
        let message = message.unwrap_or(DEFAULT_COMMIT_MESSAGE);

        // Fresh version token right before the write; missing file means
        // this persist creates it.
        let sha = self.read_current().await?.map(|current| current.sha);

        let request = PutContentsRequest {
            message,
            content: BASE64_STANDARD.encode(serialized),
            branch: &self.config.branch,
            sha,
            committer: CommitIdentity {
                name: &self.config.commit_author_name,
                email: &self.config.commit_author_email,
            },
            author: CommitIdentity {
                name: session.editor_email(),
                email: session.editor_email(),
            },
        };

        let response = self
            .client
            .put(self.contents_url())
            .bearer_auth(&self.config.token)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_server_error() {
            return Err(BackendError::Unavailable(format!(
                "github commit failed with {status}"
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Rejected(format!(
                "github commit failed with {status}: {body}"
            )));
        }

        let committed: PutContentsResponse =
            response.json().await.map_err(super::decode_error)?;
        tracing::info!(
            path = %self.config.content_path,
            editor = %session.editor_email(),
            "committed site content"
        );
        Ok(PersistReceipt {
            version: committed.content.map(|c| c.sha),
            commit_url: committed.commit.html_url,
            path: Some(self.config.content_path.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_repo() {
        for repo in ["jaipurtv", "owner/", "/repo", ""] {
            let config = GitHubConfig::new("token".to_string(), repo.to_string());
            assert!(matches!(
                GitHubBackend::new(config),
                Err(ConfigError::InvalidRepo(_))
            ));
        }
    }

    #[test]
    fn splits_owner_and_repo() {
        let config = GitHubConfig::new("token".to_string(), "jaipurtv/site-content".to_string());
        let backend = GitHubBackend::new(config).unwrap();
        assert_eq!(backend.owner, "jaipurtv");
        assert_eq!(backend.repo_name, "site-content");
        assert!(backend
            .contents_url()
            .ends_with("/repos/jaipurtv/site-content/contents/content/site-content.json"));
    }

    #[test]
    fn decodes_wrapped_base64_bodies() {
        let json = r#"{"contact": {"emailAddress": "new@x.com"}}"#;
        let encoded = BASE64_STANDARD.encode(json);
        // Reflow as the API does.
        let wrapped: String = encoded
            .as_bytes()
            .chunks(60)
            .map(|chunk| format!("{}\n", String::from_utf8_lossy(chunk)))
            .collect();
        let document = GitHubBackend::decode_file(&wrapped).unwrap();
        assert_eq!(
            document.contact.unwrap().email_address.as_deref(),
            Some("new@x.com")
        );
    }

    #[test]
    fn garbage_file_is_a_serialization_error() {
        let err = GitHubBackend::decode_file("!!not-base64!!").unwrap_err();
        assert!(matches!(err, BackendError::Serialization(_)));
    }
}
