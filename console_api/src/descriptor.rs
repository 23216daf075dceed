//! Transient request and response descriptors passed through the interceptor chain.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// HTTP method of a console request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
        };
        write!(f, "{}", s)
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
        }
    }
}

/// An outbound request before it is sent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RequestDescriptor {
    pub method: Method,
    /// Path relative to the backend origin, e.g. `/api/actuator/info`.
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RequestDescriptor {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            data: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>, data: Value) -> Self {
        Self::new(Method::Post, url).with_data(data)
    }

    pub fn patch(url: impl Into<String>, data: Value) -> Self {
        Self::new(Method::Patch, url).with_data(data)
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// A response received from the server, successful or not.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResponseDescriptor {
    pub status: u16,
    /// Absolute URL the response came from, after redirects.
    pub url: String,
    pub method: Method,
    /// Path of the originating request.
    pub path: String,
    /// Decoded body. Non-JSON bodies are kept as a string, empty bodies as null.
    pub data: Value,
}

impl ResponseDescriptor {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The non-empty `message` field of the body, if any.
    pub fn message(&self) -> Option<&str> {
        self.data
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(data: Value) -> ResponseDescriptor {
        ResponseDescriptor {
            status: 400,
            url: "http://localhost/api/x".to_string(),
            method: Method::Get,
            path: "/api/x".to_string(),
            data,
        }
    }

    #[test]
    fn message_present() {
        let resp = response(json!({"message": "duplicate key"}));
        assert_eq!(resp.message(), Some("duplicate key"));
    }

    #[test]
    fn message_missing_or_blank() {
        assert_eq!(response(json!({})).message(), None);
        assert_eq!(response(json!({"message": ""})).message(), None);
        assert_eq!(response(json!({"message": 42})).message(), None);
        assert_eq!(response(Value::Null).message(), None);
        assert_eq!(response(json!("plain text")).message(), None);
    }

    #[test]
    fn request_serializes_without_empty_body() {
        let req = RequestDescriptor::get("/api/plan");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value, json!({"method": "GET", "url": "/api/plan"}));
    }

    #[test]
    fn method_display_is_uppercase() {
        assert_eq!(Method::Patch.to_string(), "PATCH");
    }
}
