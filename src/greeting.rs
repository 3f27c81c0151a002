use serde::Serialize;

pub const GREETING_MESSAGE: &str = "Hello from Kubernetes 2!";

/// Body returned for every request. Built fresh each time, never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GreetingResponse {
    pub message: String,
    pub version: String,
}

pub fn greeting_message() -> &'static str {
    GREETING_MESSAGE
}

pub fn create_response(message: &str, version: &str) -> GreetingResponse {
    GreetingResponse {
        message: message.to_string(),
        version: version.to_string(),
    }
}

pub fn build_response(version: &str) -> GreetingResponse {
    create_response(greeting_message(), version)
}
