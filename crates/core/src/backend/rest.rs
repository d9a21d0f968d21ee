//! REST backend: a content API (see the `jaipurtv-api` crate) fronting the
//! durable write path. The client sends the whole document plus an optional
//! change note; the server answers with an opaque version token.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::{BackendAdapter, BackendError, ConfigError, FetchedDocument, PersistReceipt};
use crate::content::model::{PartialSiteContent, SiteContent};
use crate::session::Session;

#[derive(Debug, Clone)]
pub struct RestConfig {
    /// Base URL of the content API, e.g. `https://jaipurtv.in`.
    pub base_url: String,
}

pub struct RestBackend {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentEnvelope {
    content: PartialSiteContent,
    sha: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PersistRequest<'a> {
    content: &'a SiteContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    email: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistResponse {
    #[allow(dead_code)]
    status: String,
    path: Option<String>,
    commit_url: Option<String>,
    sha: Option<String>,
}

impl RestBackend {
    pub fn new(config: RestConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn content_url(&self) -> String {
        format!("{}/api/content", self.base_url)
    }
}

#[async_trait::async_trait]
impl BackendAdapter for RestBackend {
    async fn fetch_document(&self) -> Result<Option<FetchedDocument>, BackendError> {
        let response = self.client.get(self.content_url()).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let envelope: ContentEnvelope =
                    response.json().await.map_err(super::decode_error)?;
                Ok(Some(FetchedDocument {
                    document: envelope.content,
                    version: envelope.sha,
                }))
            }
            status if status.is_server_error() => Err(BackendError::Unavailable(format!(
                "content read failed with {status}"
            ))),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(BackendError::Rejected(format!(
                    "content read failed with {status}: {body}"
                )))
            }
        }
    }

    async fn persist_document(
        &self,
        document: &SiteContent,
        session: &Session,
        message: Option<&str>,
    ) -> Result<PersistReceipt, BackendError> {
        let response = self
            .client
            .post(self.content_url())
            .header(reqwest::header::AUTHORIZATION, session.authorization())
            .json(&PersistRequest {
                content: document,
                message,
                email: session.editor_email(),
            })
            .send()
            .await?;

        let status = response.status();
        if status.is_server_error() {
            return Err(BackendError::Unavailable(format!(
                "content write failed with {status}"
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Rejected(format!(
                "content write failed with {status}: {body}"
            )));
        }

        let committed: PersistResponse = response.json().await.map_err(super::decode_error)?;
        Ok(PersistReceipt {
            version: committed.sha,
            commit_url: committed.commit_url,
            path: committed.path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let backend = RestBackend::new(RestConfig {
            base_url: "https://jaipurtv.in/".to_string(),
        })
        .unwrap();
        assert_eq!(backend.content_url(), "https://jaipurtv.in/api/content");
    }
}
