//! Renders [`GatewayError`]s as HTTP responses, grounded on
//! `icann-rdap-srv::rdap::response::ResponseUtil`. The teacher's version
//! dispatches on a fully-typed `RdapResponse` enum and handles HTTP
//! redirects for its own bootstrap-redirect feature; this gateway never
//! constructs an `RdapResponse` object itself (it relays upstream bytes
//! verbatim via [`crate::rdap::forward`]), so this module only needs to
//! render the error side: `ResourceNotFound` as 404, `MalformedRequest` as
//! 400, everything else as 500, each as an RFC 9083 error body.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use lazy_static::lazy_static;
use rdap_gateway_common::media_types::RDAP_MEDIA_TYPE;
use rdap_gateway_common::response::error::Rfc9083Error;
use rdap_gateway_core::error::DirectoryError;

use crate::error::GatewayError;

lazy_static! {
    pub static ref NOT_FOUND: Rfc9083Error = Rfc9083Error::builder()
        .error_code(404)
        .title("no authority covers the queried resource".to_string())
        .build();
    pub static ref BAD_REQUEST: Rfc9083Error = Rfc9083Error::builder()
        .error_code(400)
        .title("request failed syntactic validation".to_string())
        .build();
    pub static ref INTERNAL_ERROR: Rfc9083Error = Rfc9083Error::builder().error_code(500).build();
}

pub(crate) const RDAP_HEADERS: [(&str, &str); 1] = [("content-type", RDAP_MEDIA_TYPE)];

/// Renders an [`Rfc9083Error`] as the HTTP response RFC 9083 §6 describes.
pub(crate) fn error_response(error: &Rfc9083Error) -> Response {
    let status =
        StatusCode::from_u16(error.error_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, RDAP_HEADERS, Json(error)).into_response()
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            GatewayError::Directory(DirectoryError::ResourceNotFound) => {
                tracing::debug!("resource not found");
                error_response(&NOT_FOUND)
            }
            GatewayError::Directory(DirectoryError::MalformedRequest(ref input)) => {
                tracing::debug!(input, "malformed request");
                error_response(&BAD_REQUEST)
            }
            other => {
                tracing::warn!(error = %other, "unhandled gateway error");
                error_response(&INTERNAL_ERROR)
            }
        }
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;

    #[test]
    fn GIVEN_not_found_WHEN_error_response_THEN_status_404() {
        let response = error_response(&NOT_FOUND);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn GIVEN_bad_request_WHEN_error_response_THEN_status_400() {
        let response = error_response(&BAD_REQUEST);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn GIVEN_directory_resource_not_found_WHEN_into_response_THEN_status_404() {
        let error = GatewayError::Directory(DirectoryError::ResourceNotFound);
        assert_eq!(error.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn GIVEN_directory_malformed_request_WHEN_into_response_THEN_status_400() {
        let error = GatewayError::Directory(DirectoryError::MalformedRequest("x".to_string()));
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
