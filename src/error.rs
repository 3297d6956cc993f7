use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::domain::error::SolveError;
use crate::models::{ApiError, Status};

/// Everything a route can fail with.
#[derive(Error, Debug)]
pub enum ApiFailure {
    #[error(transparent)]
    Solve(#[from] SolveError),

    /// Request is well-formed but larger than this server accepts.
    #[error("{0}")]
    OutOfRange(String),
}

impl ApiFailure {
    fn status(&self) -> Status {
        match self {
            ApiFailure::Solve(e) => e.into(),
            ApiFailure::OutOfRange(_) => Status::InvalidShape,
        }
    }
}

impl ResponseError for ApiFailure {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiFailure::Solve(SolveError::Unbounded { .. })
            | ApiFailure::Solve(SolveError::NonConvergent { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiFailure::Solve(_) | ApiFailure::OutOfRange(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiError {
            status: self.status(),
            error: self.to_string(),
        })
    }
}
