use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use shared::models::{
    ApprovalDecision, AuthenticatedUser, ErrorResponse, LoginRequest, LoginResponse, MeResponse,
    PurchaseOrder, Resource,
};
use std::sync::{Arc, Mutex};

const CSRF_COOKIE_NAME: &str = "CSRF-TOKEN";
const CSRF_HEADER_NAME: &str = "X-CSRF-Token";
const SESSION_ROTATED_HEADER: &str = "x-session-rotated";

/// Failure of a single backend call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("unable to reach the server: {0}")]
    Network(String),
    #[error("not authenticated")]
    Unauthorized,
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx response from its status and raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == StatusCode::UNAUTHORIZED.as_u16() {
            return Self::Unauthorized;
        }
        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|error| error.to_string())
            .ok()
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| {
                StatusCode::from_u16(status)
                    .ok()
                    .and_then(|code| code.canonical_reason())
                    .unwrap_or("unknown error")
                    .to_string()
            });
        Self::Status { status, message }
    }

    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::from_status(status.as_u16(), "")
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// What the session layer needs from the backend.
#[async_trait(?Send)]
pub trait SessionApi {
    /// Probe the current session. `Ok(None)` means "definitely logged out".
    async fn current_user(&self) -> Result<Option<AuthenticatedUser>, ApiError>;

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    async fn logout(&self) -> Result<(), ApiError>;
}

/// REST client for the Procura backend.
#[derive(Clone, Debug)]
pub struct ProcuraClient {
    base_url: String,
    client: Client,
    csrf_token: Arc<Mutex<Option<String>>>,
}

impl PartialEq for ProcuraClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && Arc::ptr_eq(&self.csrf_token, &other.csrf_token)
    }
}

impl ProcuraClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        let client = Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            csrf_token: Arc::new(Mutex::new(None)),
        };

        if let Some(token) = read_cookie(CSRF_COOKIE_NAME) {
            client.set_csrf_token(Some(token));
        }

        client
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn collection_path<R: Resource>() -> String {
        R::COLLECTION.to_string()
    }

    pub fn resource_path<R: Resource>(id: u64) -> String {
        format!("{}/{id}", R::COLLECTION)
    }

    pub fn set_csrf_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.csrf_token.lock() {
            *guard = token;
        }
    }

    pub fn current_csrf_token(&self) -> Option<String> {
        self.csrf_token
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }

    fn apply_csrf(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.current_csrf_token() {
            request.header(CSRF_HEADER_NAME, token)
        } else {
            request
        }
    }

    fn capture_rotation(&self, response: &Response) {
        if response
            .headers()
            .get(SESSION_ROTATED_HEADER)
            .is_some_and(|value| value == "1")
            && let Some(token) = read_cookie(CSRF_COOKIE_NAME)
        {
            self.set_csrf_token(Some(token));
        }
    }

    fn should_refresh(response: &Response) -> bool {
        response.status() == StatusCode::UNAUTHORIZED
            && response.headers().contains_key("www-authenticate")
    }

    async fn ensure_success(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status.as_u16(), &body))
    }

    /// Send a request; on an expired session refresh once and retry.
    async fn send_with_refresh<F>(&self, build: F) -> Result<Response, ApiError>
    where
        F: Fn() -> RequestBuilder,
    {
        let mut response = build().send().await?;
        if Self::should_refresh(&response) {
            drop(response);
            if let Err(err) = self.refresh_session().await {
                log::info!("session refresh failed: {err}");
                return Err(ApiError::Unauthorized);
            }
            response = build().send().await?;
        }
        self.capture_rotation(&response);
        Self::ensure_success(response).await
    }

    async fn send_json<T, F>(&self, build: F) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        F: Fn() -> RequestBuilder,
    {
        let response = self.send_with_refresh(build).await?;
        Ok(response.json().await?)
    }

    /// Authenticate with email/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.api_url("auth/login");
        let response = self.client.post(url).json(payload).send().await?;
        self.capture_rotation(&response);
        let body: LoginResponse = Self::ensure_success(response).await?.json().await?;
        self.set_csrf_token(Some(body.csrf_token.clone()));
        Ok(body)
    }

    /// Refresh the current session cookie.
    pub async fn refresh_session(&self) -> Result<LoginResponse, ApiError> {
        let url = self.api_url("auth/refresh");
        let response = self.client.post(url).send().await?;
        self.capture_rotation(&response);
        let body: LoginResponse = Self::ensure_success(response).await?.json().await?;
        self.set_csrf_token(Some(body.csrf_token.clone()));
        Ok(body)
    }

    /// Retrieve the authenticated user profile without rotating the session.
    pub async fn get_profile(&self) -> Result<MeResponse, ApiError> {
        let url = self.api_url("auth/me");
        self.send_json(move || self.client.get(url.clone())).await
    }

    /// Terminate the current session.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let url = self.api_url("auth/logout");
        let result = self.apply_csrf(self.client.post(url)).send().await;
        self.set_csrf_token(None);
        Self::ensure_success(result?).await.map(|_| ())
    }

    pub async fn list<R: Resource>(&self) -> Result<Vec<R>, ApiError> {
        let url = self.api_url(&Self::collection_path::<R>());
        self.send_json(move || self.client.get(url.clone())).await
    }

    pub async fn get<R: Resource>(&self, id: u64) -> Result<R, ApiError> {
        let url = self.api_url(&Self::resource_path::<R>(id));
        self.send_json(move || self.client.get(url.clone())).await
    }

    pub async fn create<R, B>(&self, body: &B) -> Result<R, ApiError>
    where
        R: Resource,
        B: Serialize + ?Sized,
    {
        let url = self.api_url(&Self::collection_path::<R>());
        self.send_json(move || self.apply_csrf(self.client.post(url.clone())).json(body))
            .await
    }

    pub async fn update<R, B>(&self, id: u64, body: &B) -> Result<R, ApiError>
    where
        R: Resource,
        B: Serialize + ?Sized,
    {
        let url = self.api_url(&Self::resource_path::<R>(id));
        self.send_json(move || self.apply_csrf(self.client.put(url.clone())).json(body))
            .await
    }

    pub async fn delete<R: Resource>(&self, id: u64) -> Result<(), ApiError> {
        let url = self.api_url(&Self::resource_path::<R>(id));
        self.send_with_refresh(move || self.apply_csrf(self.client.delete(url.clone())))
            .await
            .map(|_| ())
    }

    /// Move a draft order into the approval queue.
    pub async fn submit_order(&self, id: u64) -> Result<PurchaseOrder, ApiError> {
        let url = self.api_url(&format!(
            "{}/submit",
            Self::resource_path::<PurchaseOrder>(id)
        ));
        self.send_json(move || self.apply_csrf(self.client.post(url.clone())))
            .await
    }

    /// Approve or reject a pending order.
    pub async fn decide_order(
        &self,
        id: u64,
        decision: &ApprovalDecision,
    ) -> Result<PurchaseOrder, ApiError> {
        let url = self.api_url(&format!(
            "{}/decision",
            Self::resource_path::<PurchaseOrder>(id)
        ));
        self.send_json(move || {
            self.apply_csrf(self.client.post(url.clone()))
                .json(decision)
        })
        .await
    }
}

#[async_trait(?Send)]
impl SessionApi for ProcuraClient {
    async fn current_user(&self) -> Result<Option<AuthenticatedUser>, ApiError> {
        match self.get_profile().await {
            Ok(MeResponse { user, .. }) => Ok(Some(user)),
            Err(ApiError::Unauthorized) => {
                self.set_csrf_token(None);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        Self::login(self, request).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        Self::logout(self).await
    }
}

#[cfg(target_arch = "wasm32")]
fn read_cookie(name: &str) -> Option<String> {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlDocument;

    let document = web_sys::window()?.document()?;
    let html_doc: HtmlDocument = document.dyn_into().ok()?;
    let cookie_string = html_doc.cookie().ok()?;
    cookie_value(&cookie_string, name)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_cookie(_name: &str) -> Option<String> {
    None
}

/// Find `name` in a `document.cookie` style string.
fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key.trim() == name).then(|| value.trim().to_string())
    })
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
