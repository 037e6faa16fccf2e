//! HTTP client for the remote price prediction endpoint.
//!
//! The remote model is an opaque collaborator: it accepts a JSON body
//! `{"features": [<numbers>]}` via POST and answers
//! `{"prediction": <number or string>}`. This crate serializes the
//! request, performs one `fetch` call from the WASM frontend, and parses
//! the response into a typed [`PredictionValue`].
//!
//! The endpoint address is taken from the `PREDICTION_API_URL`
//! environment variable at build time, falling back to a local default.
//!
//! How the feature vector is derived from the dashboard selection is a
//! contract owned by the model service; callers currently pass an empty
//! slice.

pub mod error;

pub use error::PredictError;

use serde::{Deserialize, Serialize};
use std::fmt;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Fallback endpoint used when `PREDICTION_API_URL` is not set at build time.
const DEFAULT_ENDPOINT: &str = "http://localhost:8000/predict";

/// The prediction endpoint URL this build was configured with.
pub fn endpoint() -> &'static str {
    option_env!("PREDICTION_API_URL").unwrap_or(DEFAULT_ENDPOINT)
}

/// Request body for the prediction endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictRequest {
    pub features: Vec<f64>,
}

/// Expected response body from the prediction endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictResponse {
    pub prediction: PredictionValue,
}

/// The prediction value returned by the model.
///
/// The model is free to answer with a number (a price) or a short text
/// label (a trend such as "Rising"); both render as plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictionValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for PredictionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictionValue::Number(n) => write!(f, "{}", n),
            PredictionValue::Text(s) => f.write_str(s),
        }
    }
}

/// Serialize the request body for a feature vector.
pub fn request_body(features: &[f64]) -> String {
    serde_json::json!({ "features": features }).to_string()
}

/// Parse a response body into the prediction value.
///
/// A body that is not JSON, or whose `prediction` field is missing or of
/// an unexpected type, is a [`PredictError::MalformedResponse`].
pub fn parse_prediction_body(body: &str) -> error::Result<PredictionValue> {
    let response: PredictResponse =
        serde_json::from_str(body).map_err(|e| PredictError::MalformedResponse(e.to_string()))?;
    Ok(response.prediction)
}

/// POST the feature vector to the configured endpoint and return the
/// parsed prediction.
///
/// Performs exactly one outbound request. Transport failures, non-success
/// statuses and malformed bodies surface as [`PredictError`]; the caller
/// decides how to present them.
pub async fn predict(features: &[f64]) -> error::Result<PredictionValue> {
    let body = request_body(features);

    let headers = web_sys::Headers::new().map_err(as_network_error)?;
    headers
        .append("Content-Type", "application/json")
        .map_err(as_network_error)?;

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_headers(headers.as_ref());
    init.set_body(&JsValue::from_str(&body));

    let request =
        web_sys::Request::new_with_str_and_init(endpoint(), &init).map_err(as_network_error)?;

    let window = web_sys::window()
        .ok_or_else(|| PredictError::Network("no window object available".to_string()))?;

    log::info!("predict: POST {} with {} features", endpoint(), features.len());
    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(as_network_error)?;
    let response: web_sys::Response = response_value
        .dyn_into()
        .map_err(|_| PredictError::Network("fetch did not yield a Response".to_string()))?;

    if !response.ok() {
        return Err(PredictError::Status(response.status()));
    }

    let text_value = JsFuture::from(response.text().map_err(as_network_error)?)
        .await
        .map_err(as_network_error)?;
    let text = text_value.as_string().ok_or_else(|| {
        PredictError::MalformedResponse("response body is not text".to_string())
    })?;

    parse_prediction_body(&text)
}

fn as_network_error(value: JsValue) -> PredictError {
    let detail = value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value));
    PredictError::Network(detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_prediction() {
        let value = parse_prediction_body(r#"{"prediction": 42}"#).unwrap();
        assert_eq!(value, PredictionValue::Number(42.0));
        assert_eq!(value.to_string(), "42");
    }

    #[test]
    fn test_parse_text_prediction() {
        let value = parse_prediction_body(r#"{"prediction": "Rising"}"#).unwrap();
        assert_eq!(value, PredictionValue::Text("Rising".to_string()));
        assert_eq!(value.to_string(), "Rising");
    }

    #[test]
    fn test_missing_prediction_field_is_malformed() {
        let err = parse_prediction_body(r#"{"forecast": 1}"#).unwrap_err();
        assert!(matches!(err, PredictError::MalformedResponse(_)));
    }

    #[test]
    fn test_non_json_body_is_malformed() {
        let err = parse_prediction_body("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, PredictError::MalformedResponse(_)));
    }

    #[test]
    fn test_null_prediction_is_malformed() {
        let err = parse_prediction_body(r#"{"prediction": null}"#).unwrap_err();
        assert!(matches!(err, PredictError::MalformedResponse(_)));
    }

    #[test]
    fn test_request_body_shape() {
        assert_eq!(request_body(&[]), r#"{"features":[]}"#);
        assert_eq!(request_body(&[1.5, 2.0]), r#"{"features":[1.5,2.0]}"#);
    }

    #[test]
    fn test_endpoint_is_configured() {
        assert!(endpoint().starts_with("http"));
    }
}
