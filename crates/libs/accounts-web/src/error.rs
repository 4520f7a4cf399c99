//! Main Crate Error

use accounts_auth::error::Error as AuthError;
use accounts_models::error::Error as ModelsError;
use async_graphql::ErrorExtensions;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use tracing::error;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Models(#[from] ModelsError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Join(#[from] tokio::task::JoinError),

    #[error("Auth Token Creation")]
    AuthTokenCreation,

    #[error("Wrong Credentials")]
    WrongCredentials,

    #[error("Context Missing")]
    CtxMissing,

    /* Config Errors */
    #[error("Env Variable '{0}' missing")]
    EnvMissing(&'static str),

    #[error("Env Variable '{0}' has an invalid value")]
    EnvInvalid(&'static str),

    #[error("SECRET_KEY must not be empty")]
    EmptySecret,
}

impl Error {
    /// Status, machine-readable code and client-facing message for this error.
    ///
    /// Internal failures collapse into one opaque message so store or crypto
    /// details never reach the client.
    pub fn public_parts(&self) -> (StatusCode, &'static str, &'static str) {
        const UNAUTHENTICATED: &str = "UNAUTHENTICATED";
        const INTERNAL: (StatusCode, &str, &str) = (
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_SERVER_ERROR",
            "Internal server error",
        );

        match self {
            Error::WrongCredentials => {
                (StatusCode::UNAUTHORIZED, UNAUTHENTICATED, "Invalid credentials")
            }
            Error::CtxMissing => {
                (StatusCode::UNAUTHORIZED, UNAUTHENTICATED, "Missing credentials")
            }
            Error::Auth(err) => match err {
                AuthError::TokenMissing => {
                    (StatusCode::UNAUTHORIZED, UNAUTHENTICATED, "Authentication required")
                }
                AuthError::MalformedHeader => (
                    StatusCode::UNAUTHORIZED,
                    UNAUTHENTICATED,
                    "Malformed authorization header",
                ),
                AuthError::InvalidToken | AuthError::InvalidSignature => (
                    StatusCode::UNAUTHORIZED,
                    UNAUTHENTICATED,
                    "Invalid authentication token",
                ),
                AuthError::TokenExpired => (
                    StatusCode::UNAUTHORIZED,
                    UNAUTHENTICATED,
                    "Authentication token expired",
                ),
                AuthError::TokenCreation(_)
                | AuthError::InvalidHashFormat
                | AuthError::HashParams(_)
                | AuthError::PasswordHash(_) => INTERNAL,
            },
            Error::Models(ModelsError::UserNotFound(_)) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", "User not found")
            }
            Error::Models(_)
            | Error::Join(_)
            | Error::AuthTokenCreation
            | Error::EnvMissing(_)
            | Error::EnvInvalid(_)
            | Error::EmptySecret => INTERNAL,
        }
    }

    fn log(&self, status: StatusCode) {
        if status.is_server_error() {
            error!("Request failed: {:?}", self);
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, _, message) = self.public_parts();
        self.log(status);

        let body = Json(json!({
            "error": {
                "message": message,
                "status": status.as_u16()
            }
        }));
        (status, body).into_response()
    }
}

impl ErrorExtensions for Error {
    fn extend(&self) -> async_graphql::Error {
        let (status, code, message) = self.public_parts();
        self.log(status);

        async_graphql::Error::new(message).extend_with(|_, extensions| {
            extensions.set("code", code);
            extensions.set("status", i32::from(status.as_u16()));
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_internal_errors_are_opaque() {
        let err = Error::Models(ModelsError::Migration(String::from("relation users exists")));
        let (status, code, message) = err.public_parts();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "INTERNAL_SERVER_ERROR");
        assert!(!message.contains("users"));
    }

    #[test]
    fn test_not_found() {
        let (status, code, _) = Error::Models(ModelsError::UserNotFound(3)).public_parts();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, "NOT_FOUND");
    }

    #[test]
    fn test_graphql_extensions() {
        let err = Error::Auth(AuthError::TokenExpired).extend();
        assert_eq!(err.message, "Authentication token expired");

        let extensions = serde_json::to_value(&err.extensions).unwrap();
        assert_eq!(extensions["code"], "UNAUTHENTICATED");
        assert_eq!(extensions["status"], 401);
    }
}
