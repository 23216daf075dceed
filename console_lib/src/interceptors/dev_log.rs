use console_api::{Interceptor, RequestDescriptor, ResponseDescriptor, API_PREFIX};

use crate::config::BuildMode;

/// Logs first-party API traffic in development mode. Never alters anything.
pub struct DevLogger {
    mode: BuildMode,
}

impl DevLogger {
    pub fn new(mode: BuildMode) -> Self {
        Self { mode }
    }

    fn enabled_for(&self, path: &str) -> bool {
        self.mode.is_dev() && path.starts_with(API_PREFIX)
    }
}

impl Interceptor for DevLogger {
    fn on_request(&self, request: RequestDescriptor) -> RequestDescriptor {
        if self.enabled_for(&request.url) {
            let payload = serde_json::to_string_pretty(&request).unwrap_or_default();
            tracing::info!("{} {} request\n{}", request.method, request.url, payload);
        }
        request
    }

    fn on_response(&self, response: ResponseDescriptor) -> ResponseDescriptor {
        if self.enabled_for(&response.path) {
            let payload = serde_json::to_string_pretty(&response.data).unwrap_or_default();
            tracing::info!("{} {} response\n{}", response.method, response.path, payload);
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_api_paths_in_dev_mode() {
        let dev = DevLogger::new(BuildMode::development());
        assert!(dev.enabled_for("/api/setting"));
        assert!(!dev.enabled_for("/hook/gitlab"));

        let release = DevLogger::new(BuildMode::release());
        assert!(!release.enabled_for("/api/setting"));
    }

    #[test]
    fn request_is_returned_unmodified() {
        let logger = DevLogger::new(BuildMode::development());
        let req = RequestDescriptor::post("/api/project", json!({"name": "Shop", "key": "SHOP"}));
        assert_eq!(logger.on_request(req.clone()), req);
    }
}
