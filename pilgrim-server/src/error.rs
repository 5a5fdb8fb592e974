//! Mapping planner failures onto HTTP responses.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use pilgrim_core::PlanError;
use serde::Serialize;
use thiserror::Error;

/// Endpoint whose failure is being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `POST /generate-plan`.
    GeneratePlan,
    /// `GET /api/locations`.
    FetchLocations,
    /// `GET /api/plan/{planId}`.
    FetchPlan,
}

impl Operation {
    /// Client-facing message for an internal failure.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::GeneratePlan => "Failed to generate plan",
            Self::FetchLocations => "Failed to fetch locations",
            Self::FetchPlan => "Failed to fetch plan",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::GeneratePlan => "generate plan",
            Self::FetchLocations => "fetch locations",
            Self::FetchPlan => "fetch plan",
        };
        f.write_str(name)
    }
}

/// Error returned by request handlers.
///
/// Internal causes are logged when the error is built; clients only see the
/// fixed per-operation message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body or its fields were rejected.
    #[error("{message}")]
    BadRequest {
        /// Reason shown to the client.
        message: String,
    },
    /// No itinerary exists under the requested id.
    #[error("Plan not found")]
    PlanNotFound,
    /// A store or worker failure.
    #[error("{}", .operation.failure_message())]
    Internal {
        /// Endpoint that failed.
        operation: Operation,
    },
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// Translate a planner failure for `operation`.
    #[must_use]
    pub fn from_plan(operation: Operation, err: PlanError) -> Self {
        match err {
            PlanError::Validation(reason) => {
                log::debug!("rejected {operation} request: {reason}");
                Self::BadRequest {
                    message: reason.to_string(),
                }
            }
            PlanError::NotFound { id } => {
                log::debug!("plan {id} not found");
                Self::PlanNotFound
            }
            PlanError::Store(source) => Self::internal(operation, &source),
        }
    }

    /// Log `cause` and report a generic failure for `operation`.
    #[must_use]
    pub fn internal(operation: Operation, cause: &dyn fmt::Display) -> Self {
        log::error!("failed to {operation}: {cause}");
        Self::Internal { operation }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::PlanNotFound => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
