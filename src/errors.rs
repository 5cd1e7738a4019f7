use axum::http::StatusCode;
use thiserror::Error;

/// Failures of the calendar operations themselves, independent of HTTP.
#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("failed to load sentences: {0}")]
    Load(String),

    #[error("failed to parse stored value for {key}: {source}")]
    Parse {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl From<CalendarError> for AppError {
    fn from(err: CalendarError) -> Self {
        let status = match err {
            CalendarError::Load(_) => StatusCode::SERVICE_UNAVAILABLE,
            CalendarError::Parse { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_errors_map_to_service_unavailable() {
        let err: AppError = CalendarError::Load("sentences.json missing".into()).into();
        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.message.contains("sentences.json missing"));
    }

    #[test]
    fn parse_errors_name_the_key() {
        let source = serde_json::from_str::<Vec<usize>>("[1,").unwrap_err();
        let err = CalendarError::Parse {
            key: "adventUsedIndices",
            source,
        };
        assert!(err.to_string().contains("adventUsedIndices"));
        let err: AppError = err.into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
