use crate::state::{Message, NewMessage};
use leptos::logging::warn;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use url::Url;

/// Where the backend lives when nothing else is configured. The server
/// mounts its REST routes under `/api`.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("server responded with {0}")]
    Status(StatusCode),
}

/// Thin wrapper over the backend's message endpoints. Cheap to clone, one
/// per handler closure.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: Url,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base: Url) -> Self {
        Self {
            base,
            http: reqwest::Client::new(),
        }
    }

    /// Resolve the base URL once at startup: a compile-time `API_BASE_URL`
    /// override if one was baked in, otherwise the local default.
    pub fn from_env() -> Self {
        Self::new(parse_base(option_env!("API_BASE_URL").unwrap_or(DEFAULT_BASE_URL)))
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base.as_str().trim_end_matches('/'), path)
    }

    pub async fn list_messages(&self) -> Result<Vec<Message>, Error> {
        let res = self.http.get(self.endpoint("/messages")).send().await?;
        let body = ok_status(res)?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn create_message(&self, draft: &NewMessage) -> Result<(), Error> {
        let res = self
            .http
            .post(self.endpoint("/messages"))
            .header(CONTENT_TYPE, "application/json")
            .json(draft)
            .send()
            .await?;
        // The created message comes back in the body; the refresh re-reads it.
        ok_status(res)?;
        Ok(())
    }

    pub async fn delete_message(&self, id: u32) -> Result<(), Error> {
        let res = self
            .http
            .delete(self.endpoint(&format!("/messages/{id}")))
            .send()
            .await?;
        ok_status(res)?;
        Ok(())
    }
}

fn ok_status(res: reqwest::Response) -> Result<reqwest::Response, Error> {
    if res.status().is_success() {
        Ok(res)
    } else {
        Err(Error::Status(res.status()))
    }
}

fn parse_base(raw: &str) -> Url {
    Url::parse(raw).unwrap_or_else(|err| {
        warn!("invalid base url {raw:?}: {err}, using {DEFAULT_BASE_URL}");
        Url::parse(DEFAULT_BASE_URL).expect("default base url")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let api = ApiClient::new(parse_base(DEFAULT_BASE_URL));
        assert_eq!(api.endpoint("/messages"), "http://localhost:8000/api/messages");
        assert_eq!(
            api.endpoint(&format!("/messages/{}", 7)),
            "http://localhost:8000/api/messages/7"
        );
    }

    #[test]
    fn test_endpoint_with_trailing_slash() {
        let api = ApiClient::new(parse_base("http://localhost:8000/api/"));
        assert_eq!(api.endpoint("/messages"), "http://localhost:8000/api/messages");
    }

    #[test]
    fn test_bad_base_falls_back_to_default() {
        assert_eq!(parse_base("not a url").as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_status_error_display() {
        let err = Error::Status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "server responded with 500 Internal Server Error");
    }
}
