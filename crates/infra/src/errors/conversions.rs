//! Conversions from external infrastructure errors into domain errors.

use gotosync_domain::GotoSyncError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub GotoSyncError);

impl From<InfraError> for GotoSyncError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<GotoSyncError> for InfraError {
    fn from(value: GotoSyncError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoGotoSyncError {
    fn into_gotosync(self) -> GotoSyncError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → GotoSyncError */
/* -------------------------------------------------------------------------- */

impl IntoGotoSyncError for HttpError {
    fn into_gotosync(self) -> GotoSyncError {
        if self.is_timeout() {
            return GotoSyncError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return GotoSyncError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => GotoSyncError::Auth(message),
                404 => GotoSyncError::NotFound(message),
                429 => GotoSyncError::Network(message),
                400..=499 => GotoSyncError::InvalidInput(message),
                500..=599 => GotoSyncError::Api(message),
                _ => GotoSyncError::Network(message),
            };
        }

        GotoSyncError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_gotosync())
    }
}

/* -------------------------------------------------------------------------- */
/* Non-success status codes with response bodies */
/* -------------------------------------------------------------------------- */

/// Map a non-success status from a remote API into a domain error, keeping
/// the response body as detail.
///
/// Adapters use this when they have already read the body; the
/// classification matches the `reqwest::Error` conversion above.
pub fn status_to_error(service: &str, status: reqwest::StatusCode, detail: &str) -> GotoSyncError {
    let message = format!("{} error (HTTP {}): {}", service, status.as_u16(), detail);

    match status.as_u16() {
        401 | 403 => GotoSyncError::Auth(message),
        404 => GotoSyncError::NotFound(message),
        429 => GotoSyncError::Network(message),
        400..=499 => GotoSyncError::InvalidInput(message),
        500..=599 => GotoSyncError::Api(message),
        _ => GotoSyncError::Network(message),
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
