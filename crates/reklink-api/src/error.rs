//! Response normalization.
//!
//! Success statuses pass the JSON body through untouched (204 becomes JSON `null`);
//! everything else is classified into an [`ApiError`] kind so callers branch on
//! structure instead of matching server wording. The non-2xx classifier is a pure
//! function over `(status, body bytes)` and is exercised directly by the unit tests.

use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Failure modes of a RekLink API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 404. The message always contains "not found" (case-insensitive); the home
    /// screen relies on this kind to tell "no team yet" apart from real failures.
    #[error("{detail}")]
    NotFound { detail: String },
    /// 401 or 403 with a JSON detail body.
    #[error("{detail}")]
    Unauthorized { status: StatusCode, detail: String },
    /// 422 request validation rejected server-side.
    #[error("{detail}")]
    Validation { detail: String },
    /// Any other non-2xx status with a JSON detail body.
    #[error("{detail}")]
    Api { status: StatusCode, detail: String },
    /// Non-2xx whose body is not JSON (an HTML error page, an empty body).
    #[error("API error (status: {})", .status.as_u16())]
    Malformed { status: StatusCode },
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// A success body that does not match the expected shape.
    #[error("failed to decode response body: {message}")]
    Decode { message: String },
}

impl ApiError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    fn not_found(detail: String) -> Self {
        // Keep the server's wording when it already says "not found"; otherwise
        // prefix, so the message contract in the doc comment holds for any
        // detail. Deliberate: a detail like "is not part of any active team"
        // gets the prefix too, rather than passing through verbatim.
        let detail = if detail.to_lowercase().contains("not found") {
            detail
        } else {
            format!("Not Found: {detail}")
        };
        Self::NotFound { detail }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

fn detail_text(detail: Option<Value>) -> String {
    match detail {
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
        None => "Unknown API error".to_owned(),
    }
}

/// Classifies a non-2xx response from its status and raw body bytes.
#[must_use]
pub fn classify_error(status: StatusCode, body: &[u8]) -> ApiError {
    let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) else {
        return ApiError::Malformed { status };
    };
    let detail = detail_text(parsed.detail);

    match status {
        StatusCode::NOT_FOUND => ApiError::not_found(detail),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            ApiError::Unauthorized { status, detail }
        }
        StatusCode::UNPROCESSABLE_ENTITY => ApiError::Validation { detail },
        _ => ApiError::Api { status, detail },
    }
}

/// Pure form of the success-path normalization: 204 yields exactly `Value::Null`,
/// any other success body is parsed JSON returned as-is.
pub fn normalize_success(status: StatusCode, body: &[u8]) -> Result<Value, ApiError> {
    if status == StatusCode::NO_CONTENT {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|error| ApiError::Decode {
        message: error.to_string(),
    })
}

/// Normalizes a raw response into its JSON body or an [`ApiError`].
pub async fn normalize_response(response: reqwest::Response) -> Result<Value, ApiError> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(ApiError::Transport)?;
    if !status.is_success() {
        return Err(classify_error(status, &bytes));
    }
    normalize_success(status, &bytes)
}

pub(crate) async fn decode_json<T>(response: reqwest::Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let bytes = response.bytes().await.map_err(ApiError::Transport)?;
    if !status.is_success() {
        return Err(classify_error(status, &bytes));
    }
    serde_json::from_slice(&bytes).map_err(|error| ApiError::Decode {
        message: error.to_string(),
    })
}

pub(crate) async fn decode_empty(response: reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(ApiError::Transport)?;
    if !status.is_success() {
        return Err(classify_error(status, &bytes));
    }
    Ok(())
}
