use crate::models::RecommendationResponse;
use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use songwalk_core::{ErrorKind, LoadError, RecommendError};
use tracing::error;

pub const ERROR_KIND_HEADER: HeaderName = HeaderName::from_static("x-error-kind");

#[derive(Debug)]
pub enum ApiError {
    Recommend(RecommendError),
    /// Query string that could not be deserialized
    InvalidQuery(String),
    Internal(String),
}

impl From<RecommendError> for ApiError {
    fn from(err: RecommendError) -> Self {
        ApiError::Recommend(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

impl From<LoadError> for ApiError {
    fn from(err: LoadError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Recommend(err) => err.kind(),
            ApiError::InvalidQuery(_) => ErrorKind::Validation,
            ApiError::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound | ErrorKind::NoConnections | ErrorKind::NoRecommendations => {
                StatusCode::NOT_FOUND
            }
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> RecommendationResponse {
        match self {
            ApiError::Recommend(err) => RecommendationResponse {
                recommendations: err.suggestions().to_vec(),
                error: Some(err.to_string()),
            },
            ApiError::InvalidQuery(message) => RecommendationResponse {
                recommendations: vec![],
                error: Some(message.clone()),
            },
            ApiError::Internal(message) => RecommendationResponse {
                recommendations: vec![],
                error: Some(format!("Error: {}", message)),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(message) = &self {
            error!(%message, "error generating recommendations");
        }

        let kind = HeaderValue::from_static(self.kind().as_str());
        (self.status(), [(ERROR_KIND_HEADER, kind)], Json(self.body())).into_response()
    }
}
