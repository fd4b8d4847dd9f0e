//! Unified client implementation

use crate::{ClientError, ClientResult, HttpError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

use shared::form::EmployeeForm;
use shared::models::{Employee, EmploymentStatus};

// ============================================================================
// DirectoryClient Trait
// ============================================================================

/// Registry API operations
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// List employees, optionally narrowed to one employment status
    async fn list(&self, status: Option<EmploymentStatus>) -> ClientResult<Vec<Employee>>;

    /// Fetch a single employee record
    async fn get(&self, id: &str) -> ClientResult<Employee>;

    /// Register a new employee
    async fn create(&self, form: &EmployeeForm) -> ClientResult<Employee>;

    /// Replace an existing employee record
    async fn update(&self, id: &str, form: &EmployeeForm) -> ClientResult<Employee>;
}

fn list_path(status: Option<EmploymentStatus>) -> String {
    match status {
        Some(status) => format!("/employees?employment_status={}", status.as_str()),
        None => "/employees".to_string(),
    }
}

// ============================================================================
// RegistryClient Factory
// ============================================================================

/// Client factory
pub struct RegistryClient;

impl RegistryClient {
    /// Create a network client
    pub fn network(base_url: &str) -> ClientResult<NetworkClient> {
        NetworkClient::new(base_url)
    }

    /// Create an in-process client (takes the server Router)
    #[cfg(feature = "in-process")]
    pub fn in_process(router: axum::Router) -> InProcessClient {
        InProcessClient::new(router)
    }
}

// ============================================================================
// NetworkClient - HTTP client
// ============================================================================

/// Network client (HTTP)
#[derive(Debug, Clone)]
pub struct NetworkClient {
    client: reqwest::Client,
    base_url: String,
}

impl NetworkClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.client.get(&url).send().await?;
        Self::handle_response(resp).await
    }

    async fn send_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.client.request(method, &url).json(body).send().await?;
        Self::handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> ClientResult<T> {
        let status = resp.status();

        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(HttpError::from_parts(status, &text).into());
        }

        resp.json().await.map_err(Into::into)
    }
}

#[async_trait]
impl DirectoryClient for NetworkClient {
    async fn list(&self, status: Option<EmploymentStatus>) -> ClientResult<Vec<Employee>> {
        self.get_json(&list_path(status)).await
    }

    async fn get(&self, id: &str) -> ClientResult<Employee> {
        self.get_json(&format!("/employees/{}", id)).await
    }

    async fn create(&self, form: &EmployeeForm) -> ClientResult<Employee> {
        self.send_json(reqwest::Method::POST, "/employees", form)
            .await
    }

    async fn update(&self, id: &str, form: &EmployeeForm) -> ClientResult<Employee> {
        self.send_json(reqwest::Method::PUT, &format!("/employees/{}", id), form)
            .await
    }
}

// ============================================================================
// InProcessClient - drives a Router directly (tower oneshot)
// ============================================================================

/// In-process client (calls the Router directly, zero network overhead)
#[cfg(feature = "in-process")]
#[derive(Clone)]
pub struct InProcessClient {
    router: axum::Router,
}

#[cfg(feature = "in-process")]
impl InProcessClient {
    pub fn new(router: axum::Router) -> Self {
        Self { router }
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: http::Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> ClientResult<T> {
        use axum::body::Body;
        use tower::ServiceExt;

        let mut builder = http::Request::builder().method(method).uri(path);

        if body.is_some() {
            builder = builder.header("Content-Type", "application/json");
        }

        let req = builder
            .body(Body::from(body.unwrap_or_default()))
            .map_err(|e| ClientError::Internal(e.to_string()))?;

        let resp = self
            .router
            .clone()
            .oneshot(req)
            .await
            .map_err(|e| ClientError::Internal(e.to_string()))?;

        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
            .await
            .map_err(|e| ClientError::Internal(e.to_string()))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes);
            return Err(HttpError::from_parts(status, &text).into());
        }

        serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

#[cfg(feature = "in-process")]
#[async_trait]
impl DirectoryClient for InProcessClient {
    async fn list(&self, status: Option<EmploymentStatus>) -> ClientResult<Vec<Employee>> {
        self.request(http::Method::GET, &list_path(status), None)
            .await
    }

    async fn get(&self, id: &str) -> ClientResult<Employee> {
        self.request(http::Method::GET, &format!("/employees/{}", id), None)
            .await
    }

    async fn create(&self, form: &EmployeeForm) -> ClientResult<Employee> {
        let body = serde_json::to_vec(form)?;
        self.request(http::Method::POST, "/employees", Some(body))
            .await
    }

    async fn update(&self, id: &str, form: &EmployeeForm) -> ClientResult<Employee> {
        let body = serde_json::to_vec(form)?;
        self.request(http::Method::PUT, &format!("/employees/{}", id), Some(body))
            .await
    }
}
