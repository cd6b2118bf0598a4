//! Unified error types for the talent portal
//!
//! This module defines error types for each layer:
//! - `DomainError`: Query-boundary errors (the only errors the app layer sees)
//! - `AppError`: JSON API errors (wraps domain errors for HTTP responses)
//! - `PageError`: HTML page errors

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::feed::{render_error_page, render_not_found};

/// Domain layer errors, produced at the query boundary
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// The identifier could never have been assigned by the store
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<mongodb::error::Error> for DomainError {
    fn from(e: mongodb::error::Error) -> Self {
        DomainError::Database(e.to_string())
    }
}

/// Application layer errors - used by the JSON handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Post not found")]
    PostNotFound,

    /// A store failure; `message` is the fixed text shown to the client
    #[error("{message}: {source}")]
    FetchFailed {
        message: &'static str,
        #[source]
        source: DomainError,
    },
}

impl AppError {
    /// Convert a query error. Malformed ids are reported exactly like missing ones.
    pub fn from_query(e: DomainError, message: &'static str) -> Self {
        match e {
            DomainError::NotFound(_) | DomainError::Validation(_) => AppError::PostNotFound,
            source @ DomainError::Database(_) => AppError::FetchFailed { message, source },
        }
    }
}

/// Envelope shared by every JSON response
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(message: &str) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::PostNotFound => (StatusCode::NOT_FOUND, "Post not found"),
            AppError::FetchFailed { message, source } => {
                tracing::error!("{}: {}", message, source);
                (StatusCode::INTERNAL_SERVER_ERROR, *message)
            }
        };

        (status, Json(ApiResponse::failure(message))).into_response()
    }
}

/// HTML page errors
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Student not found")]
    NotFound,

    #[error("Page render failed: {0}")]
    Unavailable(DomainError),
}

impl From<DomainError> for PageError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(_) | DomainError::Validation(_) => PageError::NotFound,
            other => PageError::Unavailable(other),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            PageError::NotFound => (StatusCode::NOT_FOUND, render_not_found()),
            PageError::Unavailable(e) => {
                tracing::error!("Failed to fetch posts for page: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, render_error_page())
            }
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            body,
        )
            .into_response()
    }
}
