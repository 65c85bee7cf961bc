//! The uniform API envelope: `{ success, message, data?, error? }`.

use axum::{
    body::Body,
    http::{Response, StatusCode},
};
use serde_json::{Value, json};
use utoipa::ToSchema;

/// Envelope every JSON endpoint responds with. `error` carries the
/// underlying failure detail and is only populated outside production.
#[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug, ToSchema)]
pub struct ApiResponse {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable outcome message
    pub message: String,
    /// Payload, when the operation produces one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Failure detail, present only when the server runs with debug detail
    /// enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    /// Start a successful envelope with no message or payload
    pub fn builder() -> Self {
        ApiResponse {
            success: true,
            message: String::new(),
            data: None,
            error: None,
        }
    }

    /// Attach a serialized payload
    pub fn data<T: serde::Serialize + std::fmt::Debug>(mut self, data: &T) -> Self {
        self.data = serde_json::to_value(data).ok();
        self
    }

    /// Set the outcome message
    pub fn message(mut self, message: &str) -> Self {
        self.message = message.to_string();
        self
    }

    /// Mark the envelope as a success or failure
    pub fn is_success(mut self, success: bool) -> Self {
        self.success = success;
        self
    }

    /// Attach failure detail. Callers gate this on the deployment
    /// environment; pass `None` to keep the detail server-side.
    pub fn error_detail(mut self, detail: Option<String>) -> Self {
        self.error = detail;
        self
    }

    /// Render the envelope as a JSON response with the given status
    pub fn send(self, status_code: StatusCode) -> Response<Body> {
        let mut json_response = serde_json::Map::new();

        json_response.insert("success".to_string(), json!(self.success));
        json_response.insert("message".to_string(), json!(self.message));

        if let Some(data) = self.data {
            json_response.insert("data".to_string(), data);
        }

        if let Some(error) = self.error {
            json_response.insert("error".to_string(), json!(error));
        }

        let json = Value::Object(json_response);

        Response::builder()
            .status(status_code)
            .header(axum::http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap()
    }
}
