//! # sl-rest
//!
//! Study record storage behind a PostgREST endpoint (e.g. a Supabase
//! project's `/rest/v1`).
//!
//! Every request carries the project key twice, as the `apikey` header and
//! as a bearer token. Writes ask for `Prefer: return=representation` so the
//! stored rows come back in the response.

mod backend;
mod error;
mod http;

pub use error::RestError;

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Request};
use sl_core::entities::{NewRecord, RawRecord};

use crate::http::{check_response, parse_rows};

const APIKEY: HeaderName = HeaderName::from_static("apikey");
const PREFER: HeaderName = HeaderName::from_static("prefer");
const RETURN_REPRESENTATION: &str = "return=representation";

/// HTTP client for one study record table.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    table_url: String,
}

impl RestClient {
    /// Create a client for `{url}/rest/v1/{table}`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidConfig`] if the URL or key is empty or
    /// the key cannot be sent as a header, and [`RestError::Http`] if the
    /// underlying `reqwest::Client` fails to build.
    pub fn new(
        url: &str,
        api_key: &str,
        table: &str,
        timeout: Duration,
    ) -> Result<Self, RestError> {
        let base = url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(RestError::InvalidConfig("url is empty".into()));
        }
        if api_key.is_empty() {
            return Err(RestError::InvalidConfig("api_key is empty".into()));
        }

        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(api_key)
            .map_err(|e| RestError::InvalidConfig(format!("api_key: {e}")))?;
        key.set_sensitive(true);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| RestError::InvalidConfig(format!("api_key: {e}")))?;
        bearer.set_sensitive(true);
        headers.insert(APIKEY, key);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .user_agent(concat!("studylog/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            table_url: format!("{base}/rest/v1/{}", urlencoding::encode(table)),
        })
    }

    /// The collection URL requests are made against.
    #[must_use]
    pub fn table_url(&self) -> &str {
        &self.table_url
    }

    fn row_filter_url(&self, id: &str) -> String {
        format!("{}?id=eq.{}", self.table_url, urlencoding::encode(id))
    }

    fn list_request(&self) -> Result<Request, RestError> {
        Ok(self
            .http
            .get(format!("{}?select=*", self.table_url))
            .build()?)
    }

    fn insert_request(&self, record: &NewRecord) -> Result<Request, RestError> {
        Ok(self
            .http
            .post(&self.table_url)
            .header(PREFER, RETURN_REPRESENTATION)
            .json(record)
            .build()?)
    }

    fn update_request(&self, id: &str, record: &NewRecord) -> Result<Request, RestError> {
        Ok(self
            .http
            .request(Method::PATCH, self.row_filter_url(id))
            .header(PREFER, RETURN_REPRESENTATION)
            .json(record)
            .build()?)
    }

    fn delete_request(&self, id: &str) -> Result<Request, RestError> {
        Ok(self.http.delete(self.row_filter_url(id)).build()?)
    }

    async fn send(&self, request: Request) -> Result<reqwest::Response, RestError> {
        tracing::debug!(method = %request.method(), url = %request.url(), "rest request");
        check_response(self.http.execute(request).await?).await
    }

    async fn send_for_rows(&self, request: Request) -> Result<Vec<RawRecord>, RestError> {
        let body = self.send(request).await?.text().await?;
        parse_rows(&body)
    }

    /// Fetch every row of the table.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails, the endpoint returns a
    /// non-success status, or the body is not a row array.
    pub async fn list(&self) -> Result<Vec<RawRecord>, RestError> {
        self.send_for_rows(self.list_request()?).await
    }

    /// Insert one row and return the stored representation.
    ///
    /// # Errors
    ///
    /// Same as [`Self::list`].
    pub async fn insert(&self, record: &NewRecord) -> Result<Vec<RawRecord>, RestError> {
        self.send_for_rows(self.insert_request(record)?).await
    }

    /// Update the row with `id` and return the stored representation.
    /// An id that matches nothing yields an empty list.
    ///
    /// # Errors
    ///
    /// Same as [`Self::list`].
    pub async fn update(
        &self,
        id: &str,
        record: &NewRecord,
    ) -> Result<Vec<RawRecord>, RestError> {
        self.send_for_rows(self.update_request(id, record)?).await
    }

    /// Delete the row with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the endpoint returns a
    /// non-success status.
    pub async fn delete(&self, id: &str) -> Result<(), RestError> {
        self.send(self.delete_request(id)?).await?;
        Ok(())
    }
}
