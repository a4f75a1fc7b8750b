use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use workshop_contract::response::ErrorResponse;

/// Provider service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("validDate is required")]
    ParameterRequired,
    #[error("'{0}' is not a date")]
    InvalidParameter(String),
    #[error("no data")]
    NoData,
}

impl ProviderError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ParameterRequired => "PARAMETER_REQUIRED",
            Self::InvalidParameter(_) => "INVALID_PARAMETER",
            Self::NoData => "NO_DATA",
        }
    }
}

impl IntoResponse for ProviderError {
    fn into_response(self) -> Response {
        // tower-http TraceLayer already records method/uri/status; these are
        // expected rejections, so keep them out of the default log level.
        tracing::debug!(kind = self.kind(), reason = %self, "rejected provider request");
        match self {
            Self::NoData => StatusCode::NOT_FOUND.into_response(),
            Self::ParameterRequired | Self::InvalidParameter(_) => (
                StatusCode::BAD_REQUEST,
                axum::Json(ErrorResponse::new(self.to_string())),
            )
                .into_response(),
        }
    }
}
