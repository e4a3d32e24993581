//! HTTP transport for the movie service.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::{
    error::ErrorBody,
    protocol::{
        Envelope, HistoryEnvelope, SearchEnvelope, MOVIE_API_PREFIX, SEARCH_HISTORY_SEGMENT,
        SEARCH_SEGMENT,
    },
};
use tracing::info;
use url::Url;

use crate::{error::ServiceError, ClientSettings};

#[async_trait]
pub trait MovieApi: Send + Sync {
    async fn search_movie(&self, query: &str) -> Result<SearchEnvelope, ServiceError>;
    async fn search_history(&self) -> Result<HistoryEnvelope, ServiceError>;
}

pub struct HttpMovieApi {
    http: Client,
    base_url: Url,
}

impl HttpMovieApi {
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let base_url = Url::parse(&settings.api_base_url)
            .with_context(|| format!("invalid movie service url '{}'", settings.api_base_url))?;
        if base_url.cannot_be_a_base() {
            bail!("movie service url '{base_url}' cannot carry a path");
        }
        let http = Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/api/Movie/{segments...}`; each segment is percent-encoded, so a
    /// query containing `/`, `?` or `#` stays a single path segment.
    ///
    /// `.` and `..` are dot-segments that URL normalization removes (escaping
    /// them as `%2E` does not survive either), so they are refused.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ServiceError> {
        if let Some(segment) = segments.iter().find(|segment| is_dot_segment(segment)) {
            return Err(ServiceError::RequestNotSent {
                detail: format!("path segment '{segment}' would be removed by URL normalization"),
            });
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ServiceError::RequestNotSent {
                detail: format!("movie service url '{}' cannot carry a path", self.base_url),
            })?
            .pop_if_empty()
            .extend(MOVIE_API_PREFIX)
            .extend(segments);
        Ok(url)
    }

    async fn get_envelope<T: DeserializeOwned>(
        &self,
        url: Url,
    ) -> Result<Envelope<T>, ServiceError> {
        info!(%url, "movie service request");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ServiceError::from_send_error)?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| ServiceError::NoResponse {
                detail: format!("failed reading response body: {err}"),
            })?;

        if !status.is_success() {
            return Err(ServiceError::ServerStatus {
                status: status.as_u16(),
                body: ErrorBody::from_bytes(&body),
                raw_body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        serde_json::from_slice(&body).map_err(|err| ServiceError::MalformedEnvelope {
            detail: err.to_string(),
        })
    }
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

#[async_trait]
impl MovieApi for HttpMovieApi {
    async fn search_movie(&self, query: &str) -> Result<SearchEnvelope, ServiceError> {
        let url = self.endpoint(&[SEARCH_SEGMENT, query])?;
        self.get_envelope(url).await
    }

    async fn search_history(&self) -> Result<HistoryEnvelope, ServiceError> {
        let url = self.endpoint(&[SEARCH_HISTORY_SEGMENT])?;
        self.get_envelope(url).await
    }
}
