use std::sync::{Arc, LazyLock};

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderName},
    middleware::Next,
    response::Response,
};
use regex::Regex;
use tracing::debug;

use crate::http::AppError;
use api::error::{ApiError, ErrorKind};
use common::{
    USER_REGEX,
    config::{AuthnBackend, HbConfig},
};

static USER_MATCHER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(USER_REGEX).expect("USER_REGEX is a valid regex"));

// user auth information passed in from middleware to the axum extractors,
// attached to the request via an extension with this type
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub uid: String,
}

// how the middleware decides who is making a request
#[derive(Clone, Debug)]
pub enum Authenticator {
    // authentication via reverse proxy, which sets the uid in a header
    ProxyHeader { header_key: HeaderName },
    // every request is the same user
    Static { uid: String },
}

impl Authenticator {
    pub fn from_config(config: &HbConfig) -> anyhow::Result<Self> {
        match config.authn_backend {
            AuthnBackend::ProxyHeader => {
                let proxyheader = config
                    .proxyheader
                    .as_ref()
                    .ok_or_else(|| anyhow::Error::msg("missing [config.proxyheader] table"))?;

                Ok(Authenticator::ProxyHeader {
                    header_key: HeaderName::try_from(proxyheader.header.as_str())?,
                })
            }
            AuthnBackend::Static => {
                let static_user = config
                    .static_user
                    .as_ref()
                    .ok_or_else(|| anyhow::Error::msg("missing [config.static_user] table"))?;

                Ok(Authenticator::Static {
                    uid: static_user.uid.clone(),
                })
            }
        }
    }

    // None if the request does not identify a (well-formed) user
    fn uid(&self, headers: &HeaderMap) -> Option<String> {
        let uid = match self {
            Authenticator::ProxyHeader { header_key } => headers
                .get(header_key)
                .and_then(|header| header.to_str().ok())
                .map(|val| val.trim().to_owned())?,
            Authenticator::Static { uid } => uid.clone(),
        };

        USER_MATCHER.is_match(&uid).then_some(uid)
    }
}

pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let uid = match authenticator.uid(req.headers()) {
        Some(uid) => uid,
        None => {
            debug!({ uri = %req.uri() }, "rejecting unauthenticated request");
            return Err(ApiError::new(ErrorKind::Unauthorized, "not signed in").into());
        }
    };

    // if auth succeeds, pass CurrentUser as a request extension to handlers
    req.extensions_mut().insert(CurrentUser { uid });

    // then, continue on in the tower of middleware
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn proxy_header_must_hold_a_valid_uid() {
        let auth = Authenticator::ProxyHeader {
            header_key: HeaderName::from_static("x-remote-user"),
        };

        let mut headers = HeaderMap::new();
        assert_eq!(auth.uid(&headers), None);

        headers.insert("x-remote-user", HeaderValue::from_static("alice"));
        assert_eq!(auth.uid(&headers), Some(String::from("alice")));

        headers.insert("x-remote-user", HeaderValue::from_static("alice; drop"));
        assert_eq!(auth.uid(&headers), None);
    }

    #[test]
    fn static_user_ignores_headers() {
        let auth = Authenticator::Static {
            uid: String::from("dev"),
        };

        assert_eq!(auth.uid(&HeaderMap::new()), Some(String::from("dev")));
    }
}
