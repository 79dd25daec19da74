// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Extractors that report rejections through [`AppError`].

use crate::error::AppError;
use axum::extract::{
    rejection::{JsonRejection, PathRejection},
    FromRequest, FromRequestParts, Path, Request,
};
use axum::http::{request::Parts, StatusCode};
use axum::Json;

/// Like [`axum::Json`], but a body that is missing, not JSON, or not the
/// expected shape becomes a 422 with the usual JSON error body.
///
/// Bodies over the size limit keep their 413.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection @ JsonRejection::BytesRejection(_))
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE =>
            {
                Err(AppError::PayloadTooLarge(rejection.body_text()))
            }
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
                Err(AppError::Validation(rejection.body_text()))
            }
        }
    }
}

/// Like [`axum::extract::Path`], but an undecodable segment (such as
/// percent-encoded bytes that are not UTF-8) is reported as an invalid
/// identifier instead of a plain-text 400.
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "Rejected path parameter");
                let raw = parts.uri.path().rsplit('/').next().unwrap_or_default();
                Err(AppError::InvalidId(raw.to_string()))
            }
        }
    }
}
