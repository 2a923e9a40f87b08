//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use shop_console::console::{LoadingIndicator, Navigator, Notifier, Services, Severity};
use shop_console::{ApiBaseUrl, ConsoleConfig, RestClient};
use wiremock::MockServer;

/// Builds a configuration pointing at the mock server.
pub fn test_config(server: &MockServer) -> ConsoleConfig {
    ConsoleConfig::builder()
        .api_base(ApiBaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

/// Builds a REST client pointing at the mock server.
pub fn test_client(server: &MockServer) -> RestClient {
    RestClient::new(&test_config(server)).unwrap()
}

/// Everything the view-models told the front end, in order.
#[derive(Debug, Default)]
pub struct Recorded {
    pub loading: Vec<bool>,
    pub notifications: Vec<(Severity, String)>,
    pub routes: Vec<String>,
}

/// Collaborators that record every call.
#[derive(Debug, Default)]
pub struct Recorder(Mutex<Recorded>);

impl Recorder {
    pub fn loading(&self) -> Vec<bool> {
        self.0.lock().unwrap().loading.clone()
    }

    pub fn notifications(&self) -> Vec<(Severity, String)> {
        self.0.lock().unwrap().notifications.clone()
    }

    pub fn routes(&self) -> Vec<String> {
        self.0.lock().unwrap().routes.clone()
    }

    /// Asserts the indicator was raised and is now released.
    pub fn assert_loading_released(&self) {
        let loading = self.loading();
        assert!(!loading.is_empty(), "loading was never set");
        assert_eq!(loading.first(), Some(&true));
        assert_eq!(loading.last(), Some(&false));
    }
}

impl LoadingIndicator for Recorder {
    fn set_loading(&self, loading: bool) {
        self.0.lock().unwrap().loading.push(loading);
    }
}

impl Notifier for Recorder {
    fn notify(&self, severity: Severity, message: &str) {
        self.0
            .lock()
            .unwrap()
            .notifications
            .push((severity, message.to_string()));
    }
}

impl Navigator for Recorder {
    fn goto(&self, route: &str) {
        self.0.lock().unwrap().routes.push(route.to_string());
    }
}

/// Returns services backed by a single recorder.
pub fn recording_services() -> (Services, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    let services = Services::new(recorder.clone(), recorder.clone(), recorder.clone());
    (services, recorder)
}

/// A server error body in the backend's format.
pub fn error_body(status: u16, message: &str) -> serde_json::Value {
    serde_json::json!({
        "timestamp": "2024-05-01T10:00:00.000+00:00",
        "status": status,
        "error": "Bad Request",
        "message": message,
        "path": "/api/v1/shops"
    })
}
