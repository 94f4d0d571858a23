use crate::config::ApiBase;
use crate::models::requests::default_limit;
use crate::models::responses::parse_content_disposition;
use crate::models::{Candidate, HealthResponse, ListResumesQuery, ResumeFile, ShortlistRequest};
use reqwest::{header, Client, Response};
use serde_json::Value;
use thiserror::Error;
use validator::Validate;

/// Errors that can occur when talking to the shortlisting API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status; `body` is the raw response text
    #[error("Request failed with status {status}: {body}")]
    RequestError { status: u16, body: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Invalid request: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Client for the resume shortlisting backend
///
/// No timeout is applied; a request waits for as long as the backend takes.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: ApiBase,
    client: Client,
}

impl ApiClient {
    pub fn new(base: ApiBase) -> Self {
        Self {
            base,
            client: Client::new(),
        }
    }

    pub fn base(&self) -> &ApiBase {
        &self.base
    }

    /// GET /stats
    pub async fn get_stats(&self) -> Result<Value, ApiError> {
        let url = self.base.join("/stats");
        tracing::debug!("Fetching stats from: {}", url);

        let response = self.client.get(&url).send().await?;
        let response = ensure_success(response).await?;

        Ok(response.json().await?)
    }

    /// POST /shortlist
    ///
    /// Returns candidates in backend order.
    pub async fn shortlist_resumes(
        &self,
        request: &ShortlistRequest,
    ) -> Result<Vec<Candidate>, ApiError> {
        request.validate()?;

        let url = self.base.join("/shortlist");
        tracing::debug!(
            "Shortlisting {} resumes with {}-{} years",
            request.category,
            request.min_exp,
            request.max_exp
        );

        let response = self.client.post(&url).json(request).send().await?;
        let response = ensure_success(response).await?;

        let json: Value = response.json().await?;
        let candidates = json
            .as_array()
            .ok_or_else(|| ApiError::InvalidResponse("Expected an array of candidates".into()))?;

        candidates
            .iter()
            .map(|c| {
                serde_json::from_value(c.clone()).map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse candidate: {}", e))
                })
            })
            .collect()
    }

    /// GET /resumes?limit={limit}
    pub async fn list_resumes(&self, limit: Option<u32>) -> Result<Value, ApiError> {
        let query = ListResumesQuery {
            limit: limit.unwrap_or_else(default_limit),
        };
        let url = self.base.join("/resumes");
        tracing::debug!("Listing resumes from: {} (limit {})", url, query.limit);

        let response = self.client.get(&url).query(&query).send().await?;
        let response = ensure_success(response).await?;

        Ok(response.json().await?)
    }

    /// GET /health
    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        let response = self.client.get(self.base.join("/health")).send().await?;
        let response = ensure_success(response).await?;

        Ok(response.json().await?)
    }

    /// Link the backend serves a resume file from
    pub fn download_url(&self, resume_id: &str) -> String {
        self.base.resume_download(resume_id)
    }

    /// Fetch a resume file
    pub async fn download_resume(&self, resume_id: &str) -> Result<ResumeFile, ApiError> {
        let url = self.download_url(resume_id);
        tracing::debug!("Downloading resume from: {}", url);

        let response = self.client.get(&url).send().await?;
        let response = ensure_success(response).await?;

        let headers = response.headers();
        let file_name = headers
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_disposition);
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();

        let bytes = response.bytes().await?.to_vec();

        Ok(ResumeFile {
            file_name,
            content_type,
            bytes,
        })
    }
}

/// Turn a non-success status into `RequestError` carrying the body text
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unable to read body".to_string());
    tracing::error!("Shortlisting API returned {} - {}", status, body);

    Err(ApiError::RequestError {
        status: status.as_u16(),
        body,
    })
}
