use crate::{ApiError, ApiResult, BearerToken, message};

use std::time::Duration;

use fl_core::{AuthSession, Credentials, Registration, UserProfile};
use log::debug;
use reqwest::{Client as ReqwestClient, Method};
use serde::Deserialize;
use serde_json::Value;

/// HTTP client for the FarmLink marketplace REST API.
///
/// Attaches the current bearer token when one is present; requests go out
/// unauthenticated otherwise, so public endpoints pass through. Does not
/// retry, cache, or deduplicate concurrent identical requests.
pub struct ApiClient {
    pub base_url: String,
    token: BearerToken,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `timeout_secs` - Per-request timeout
    /// * `token` - Shared bearer token slot, written by the session layer
    pub fn new(base_url: &str, timeout_secs: u64, token: BearerToken) -> Self {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client,
        }
    }

    /// The shared token slot this client reads from.
    pub fn bearer_token(&self) -> BearerToken {
        self.token.clone()
    }

    /// Build a request, attaching the bearer token when present.
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(token) = self.token.get() {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute a request and normalize failures.
    ///
    /// Non-success statuses become `ApiError::Api` carrying the message
    /// extracted from the body (falling back to `fallback`); transport
    /// failures become `ApiError::Network`. Callers re-classify `Api` into
    /// their operation-specific kind.
    async fn execute(&self, req: reqwest::RequestBuilder, fallback: &str) -> ApiResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let msg = message::normalize(Some(&body), None, fallback);
            debug!("Request failed with {}: {}", status, msg);
            return Err(ApiError::api(status.as_u16(), msg));
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(ApiError::from_json)
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Exchange credentials for a new session via `POST /auth/login`.
    ///
    /// A server rejection surfaces as `ApiError::InvalidCredentials` with
    /// the normalized message; transport failures stay `Network`.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<AuthSession> {
        let req = self.request(Method::POST, "/auth/login").json(credentials);
        let value = self
            .execute(req, "Login failed")
            .await
            .map_err(reject_as_invalid_credentials)?;

        serde_json::from_value(value).map_err(ApiError::from_json)
    }

    /// Create an account and a first session via `POST /auth/register`.
    ///
    /// Server-side field validation (duplicate email, missing fields)
    /// surfaces as `ApiError::Validation`.
    pub async fn register(&self, registration: &Registration) -> ApiResult<AuthSession> {
        let req = self
            .request(Method::POST, "/auth/register")
            .json(registration);
        let value = self
            .execute(req, "Registration failed")
            .await
            .map_err(reject_as_validation)?;

        serde_json::from_value(value).map_err(ApiError::from_json)
    }

    /// Fetch the profile behind the current token via `GET /auth/me`.
    ///
    /// Any non-success status means the token no longer identifies a live
    /// session, so rejections surface as `ApiError::SessionExpired`.
    pub async fn me(&self) -> ApiResult<UserProfile> {
        #[derive(Deserialize)]
        struct MeResponse {
            user: UserProfile,
        }

        let req = self.request(Method::GET, "/auth/me");
        let value = self
            .execute(req, "Session is no longer valid")
            .await
            .map_err(reject_as_session_expired)?;

        let body: MeResponse = serde_json::from_value(value).map_err(ApiError::from_json)?;
        Ok(body.user)
    }

    // =========================================================================
    // Marketplace Operations
    // =========================================================================

    /// List product listings. Public endpoint - works without a token.
    pub async fn list_products(&self) -> ApiResult<Value> {
        let req = self.request(Method::GET, "/products");
        self.execute(req, "Failed to load products").await
    }

    /// List the current user's orders. Requires a bearer token.
    pub async fn my_orders(&self) -> ApiResult<Value> {
        let req = self.request(Method::GET, "/orders/mine");
        self.execute(req, "Failed to load orders").await
    }
}

fn reject_as_invalid_credentials(err: ApiError) -> ApiError {
    match err {
        ApiError::Api {
            message, location, ..
        } => ApiError::InvalidCredentials { message, location },
        other => other,
    }
}

fn reject_as_validation(err: ApiError) -> ApiError {
    match err {
        ApiError::Api {
            message, location, ..
        } => ApiError::Validation { message, location },
        other => other,
    }
}

fn reject_as_session_expired(err: ApiError) -> ApiError {
    match err {
        ApiError::Api {
            message, location, ..
        } => ApiError::SessionExpired { message, location },
        other => other,
    }
}
