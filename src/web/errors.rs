//! # Erros da API HTTP
//!
//! Todo erro vira uma resposta JSON `{ "error": mensagem, "code": status }`.
//!
//! | Variante | Status |
//! |----------|--------|
//! | `BadRequest` | 400 |
//! | `UnknownSymptoms` | 400 |
//! | `Integrity` | 422 |
//! | `Internal` | 500 |

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::core::{IntegrityIssue, KnowledgeBaseError};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Corpo ausente, JSON malformado ou campos errados.
    #[error("invalid request body: {0}")]
    BadRequest(String),

    /// Strings fora do conjunto fechado de sintomas.
    #[error("unknown symptom identifiers: {}", .0.join(", "))]
    UnknownSymptoms(Vec<String>),

    /// O arquivo recarregado falhou na validação; o snapshot anterior segue ativo.
    #[error("{0}")]
    Integrity(#[from] KnowledgeBaseError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::UnknownSymptoms(_) => StatusCode::BAD_REQUEST,
            ApiError::Integrity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Corpo das respostas de erro.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    /// Problemas de integridade, quando aplicável.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<String>,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        let issues = match err {
            ApiError::Integrity(e) => e.issues().iter().map(IntegrityIssue::to_string).collect(),
            _ => Vec::new(),
        };
        Self {
            error: err.to_string(),
            code: err.status_code().as_u16(),
            issues,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "requisição rejeitada");
        (self.status_code(), Json(ErrorResponse::from(&self))).into_response()
    }
}
