use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::{error::DeckError, models::ErrorResponse};

impl ResponseError for DeckError {
    fn status_code(&self) -> StatusCode {
        match self {
            DeckError::MissingInput => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Generate request failed: {}", self);
        }
        HttpResponse::build(status).json(ErrorResponse {
            error: self.public_message().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(DeckError::MissingInput.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            DeckError::ResponseError("eof".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            DeckError::UpstreamError {
                status: 400,
                body: String::new()
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
