use std::fmt::Display;

use serde::{Deserialize, Serialize};

// error classes that the server reports to clients
//
// the webapp only needs to tell these apart for the create flow, where a
// duplicate name is recoverable and everything else is shown verbatim
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    Validation,
    Unauthorized,
    NotFound,
    DuplicateName,
    Internal,
}

impl ErrorKind {
    pub fn status(&self) -> u16 {
        match self {
            ErrorKind::Validation => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::NotFound => 404,
            ErrorKind::DuplicateName => 409,
            ErrorKind::Internal => 500,
        }
    }

    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ErrorKind::Validation,
            401 | 403 => ErrorKind::Unauthorized,
            404 => ErrorKind::NotFound,
            409 => ErrorKind::DuplicateName,
            _ => ErrorKind::Internal,
        }
    }
}

// the json body of every non-2xx api response
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        ApiError {
            kind,
            message: message.into(),
        }
    }

    pub fn duplicate_name(name: &str) -> Self {
        ApiError::new(
            ErrorKind::DuplicateName,
            format!("A collection named \"{name}\" already exists"),
        )
    }

    // responses that did not come from our error handler (a reverse proxy, say)
    // still get classified by their status code
    pub fn from_body(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ApiError>(body) {
            Ok(err) => err,
            Err(_) => {
                let message = if body.trim().is_empty() {
                    format!("request failed with http status {status}")
                } else {
                    body.trim().to_owned()
                };

                ApiError::new(ErrorKind::from_status(status), message)
            }
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

// find the ApiError inside an anyhow chain, if there is one
pub fn api_error(err: &anyhow::Error) -> Option<&ApiError> {
    err.chain().find_map(|e| e.downcast_ref::<ApiError>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_server_error_bodies() {
        let body = serde_json::to_string(&ApiError::duplicate_name("Work")).unwrap();

        let err = ApiError::from_body(409, &body);

        assert_eq!(err.kind, ErrorKind::DuplicateName);
        assert_eq!(err.message, "A collection named \"Work\" already exists");
    }

    #[test]
    fn falls_back_to_status_for_foreign_bodies() {
        let err = ApiError::from_body(502, "<html>bad gateway</html>");
        assert_eq!(err.kind, ErrorKind::Internal);
        assert_eq!(err.message, "<html>bad gateway</html>");

        let err = ApiError::from_body(401, "");
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert_eq!(err.message, "request failed with http status 401");
    }

    #[test]
    fn survives_anyhow_context() {
        let err = anyhow::Error::new(ApiError::duplicate_name("Work")).context("creating collection");

        let found = api_error(&err).map(|e| e.kind);
        assert_eq!(found, Some(ErrorKind::DuplicateName));

        let plain = anyhow::Error::msg("connection reset");
        assert!(api_error(&plain).is_none());
    }
}
