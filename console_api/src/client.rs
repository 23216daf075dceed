//! HTTP client for the console backend.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::{
    descriptor::{RequestDescriptor, ResponseDescriptor},
    interceptor::{ErrorFlow, Interceptor, InterceptorChain},
    types::{ActuatorInfo, Environment, Plan, Principal, PrincipalId, Project, Setting},
    Error, RequestError,
};

/// Timeout applied to every outbound request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Path prefix of all first-party API routes.
pub const API_PREFIX: &str = "/api";

/// HTTP client for the console backend.
///
/// Every request runs through the client's [`InterceptorChain`]. A call
/// resolves to `Ok(Some(_))` on success, `Ok(None)` when an interceptor
/// recovered the failure, and `Err(_)` when the failure reached the caller.
pub struct Client {
    /// Backend origin, e.g. `http://localhost:8080`.
    base_api_url: Url,
    http: reqwest::Client,
    interceptors: InterceptorChain,
}

/// Builder for [`Client`]. Interceptors are fixed once the client is built.
pub struct ClientBuilder {
    base_url: String,
    timeout: Duration,
    interceptors: InterceptorChain,
}

impl ClientBuilder {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_interceptor<I>(mut self, interceptor: I) -> Self
    where
        I: Interceptor + 'static,
    {
        self.interceptors = self.interceptors.with(interceptor);
        self
    }

    pub fn with_interceptors(mut self, interceptors: InterceptorChain) -> Self {
        self.interceptors = interceptors;
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let base_api_url = Url::parse(&self.base_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", self.base_url, e);
            Error::InvalidUrl(e)
        })?;
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Build(e)
            })?;
        Ok(Client {
            base_api_url,
            http,
            interceptors: self.interceptors,
        })
    }
}

impl Client {
    pub fn builder(base_url: &str) -> ClientBuilder {
        ClientBuilder {
            base_url: base_url.to_string(),
            timeout: DEFAULT_TIMEOUT,
            interceptors: InterceptorChain::new(),
        }
    }

    /// Creates a client without interceptors. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::builder(base_url).build()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_api_url
    }

    /// Sends a request through the interceptor chain.
    pub async fn send(&self, request: RequestDescriptor) -> Result<Option<ResponseDescriptor>, Error> {
        let request = self.interceptors.request(request);
        let url = self.base_api_url.join(&request.url)?;

        let mut builder = self.http.request(request.method.into(), url);
        if let Some(data) = &request.data {
            builder = builder.json(data);
        }

        let resp = match builder.send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::debug!("{} {} failed: {}", request.method, request.url, e);
                return self.fail(RequestError::from_transport(&e));
            }
        };

        let status = resp.status();
        let response_url = resp.url().to_string();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("Failed to read response body from {}: {}", response_url, e);
                return self.fail(RequestError::from_transport(&e));
            }
        };

        let response = ResponseDescriptor {
            status: status.as_u16(),
            url: response_url,
            method: request.method,
            path: request.url,
            data: decode_body(&body),
        };

        if response.is_success() {
            return Ok(Some(self.interceptors.response(response)));
        }

        tracing::debug!(
            "Request failed with status {}: {}",
            response.status,
            truncate_body(&body)
        );
        self.fail(RequestError::Response(response))
    }

    fn fail(&self, error: RequestError) -> Result<Option<ResponseDescriptor>, Error> {
        match self.interceptors.error(error) {
            ErrorFlow::Recovered => Ok(None),
            ErrorFlow::Next(error) => Err(error.into()),
        }
    }

    async fn get<T>(&self, path: &str) -> Result<Option<T>, Error>
    where
        T: DeserializeOwned,
    {
        let Some(resp) = self.send(RequestDescriptor::get(path)).await? else {
            return Ok(None);
        };
        let parsed = serde_json::from_value::<T>(resp.data).map_err(|source| {
            tracing::error!("Failed to parse resource from {}: {}", path, source);
            Error::Decode {
                path: path.to_string(),
                source,
            }
        })?;
        Ok(Some(parsed))
    }

    /// Fetches the backend's operational metadata, including its canonical host.
    pub async fn get_actuator_info(&self) -> Result<Option<ActuatorInfo>, Error> {
        self.get("/api/actuator/info").await
    }

    /// Fetches all workspace settings.
    pub async fn get_settings(&self) -> Result<Option<Vec<Setting>>, Error> {
        self.get("/api/setting").await
    }

    /// Fetches the current subscription plan.
    pub async fn get_plan(&self) -> Result<Option<Plan>, Error> {
        self.get("/api/plan").await
    }

    /// Fetches a single principal by its numeric ID.
    pub async fn get_principal(&self, principal_id: PrincipalId) -> Result<Option<Principal>, Error> {
        self.get(format!("/api/principal/{}", principal_id).as_str())
            .await
    }

    /// Fetches all projects visible to the current user.
    pub async fn get_projects(&self) -> Result<Option<Vec<Project>>, Error> {
        self.get("/api/project").await
    }

    /// Fetches all environments in pipeline order.
    pub async fn get_environments(&self) -> Result<Option<Vec<Environment>>, Error> {
        self.get("/api/environment").await
    }
}

fn decode_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
