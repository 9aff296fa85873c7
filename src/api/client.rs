//! Blocking JSON client for the HR REST API.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::api::ErrorBody;
use crate::session::SessionContext;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::{Duration, Instant};

const UNKNOWN_ERROR: &str = "An unknown error occurred";

pub type Query<'a> = &'a [(&'a str, String)];

pub struct ApiClient {
    base_url: String,
    http: Client,
    session: Arc<SessionContext>,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration, session: Arc<SessionContext>) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hrdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            session,
        })
    }

    pub fn from_config(cfg: &Config, session: Arc<SessionContext>) -> AppResult<Self> {
        Self::new(
            &cfg.api_base_url,
            Duration::from_secs(cfg.request_timeout_secs),
            session,
        )
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str, query: Query) -> AppResult<RequestBuilder> {
        let mut req = self
            .http
            .request(method, self.url_for(path))
            .header(CONTENT_TYPE, "application/json");
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(token) = self.session.auth_token()? {
            req = req.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        Ok(req)
    }

    /// Send and map failures: 401 clears the session, other non-2xx statuses
    /// carry the server's `message` when it has one.
    fn send(&self, req: RequestBuilder, path: &str) -> AppResult<Response> {
        let started = Instant::now();
        let resp = req.send()?;
        let status = resp.status();
        tracing::debug!(
            path,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "api call"
        );

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(path, "unauthorized, clearing session");
            self.session.clear_auth()?;
            return Err(AppError::Unauthorized);
        }

        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
            tracing::error!(path, status = status.as_u16(), %message, "api error");
            return Err(AppError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp)
    }

    fn decode<T: DeserializeOwned>(resp: Response) -> AppResult<T> {
        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    pub fn get<T: DeserializeOwned>(&self, path: &str, query: Query) -> AppResult<T> {
        let req = self.request(Method::GET, path, query)?;
        Self::decode(self.send(req, path)?)
    }

    pub fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let req = self.request(Method::POST, path, &[])?.json(body);
        Self::decode(self.send(req, path)?)
    }

    /// POST whose response body is ignored.
    pub fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> AppResult<()> {
        let req = self.request(Method::POST, path, &[])?.json(body);
        self.send(req, path).map(|_| ())
    }

    pub fn put_unit(&self, path: &str) -> AppResult<()> {
        let req = self.request(Method::PUT, path, &[])?;
        self.send(req, path).map(|_| ())
    }

    pub fn delete_unit(&self, path: &str) -> AppResult<()> {
        let req = self.request(Method::DELETE, path, &[])?;
        self.send(req, path).map(|_| ())
    }

    /// Raw download with an explicit `Accept` type.
    pub fn get_bytes(&self, path: &str, query: Query, accept: &str) -> AppResult<Vec<u8>> {
        let req = self.request(Method::GET, path, query)?.header(ACCEPT, accept);
        let resp = self.send(req, path)?;
        Ok(resp.bytes()?.to_vec())
    }
}
