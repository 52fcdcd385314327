use std::sync::LazyLock;

use regex::Regex;

pub mod auth;
pub mod collection;
pub mod error;

// http url root for the api endpoints
//
// the server mounts the router under this path, and the webapp is served
// from the same origin so that requests need no cors handling
pub const API_ROOT: &str = "/hintbox/api";

// collection names
//
// names are stored trimmed, and the length limit is in characters rather
// than bytes so that the frontend and the database agree
pub const COLLECTION_NAME_MAX: usize = 64;

static COLLECTION_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\p{Cc}]+$").expect("collection name regex is valid"));

// check a collection name, returning the normalized (trimmed) name or a
// message suitable for display next to the form field
pub fn validate_collection_name(name: &str) -> Result<String, String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(String::from("Collection name is required"));
    }

    if name.chars().count() > COLLECTION_NAME_MAX {
        return Err(format!(
            "Collection name must be at most {COLLECTION_NAME_MAX} characters"
        ));
    }

    if !COLLECTION_NAME_REGEX.is_match(name) {
        return Err(String::from(
            "Collection name may not contain control characters",
        ));
    }

    Ok(name.to_owned())
}

// request helper
//
// for an endpoint Foo, this expands to an async fn foo(&FooReq) -> Result<FooResp>
// that posts the request to the matching server route.  error bodies are
// decoded into an ApiError so that callers can downcast and match on the kind.
#[macro_export]
macro_rules! endpoint {
    ($name:ident) => {
        paste::paste! {
            pub async fn [<$name:snake>](req: &[<$name:camel Req>]) -> anyhow::Result<[<$name:camel Resp>]> {
                let resp = gloo_net::http::Request::post(
                    format!("{}/{}", $crate::API_ROOT, stringify!([<$name:camel>])).as_str(),
                )
                .json(req)?
                .send()
                .await?;

                if resp.ok() {
                    Ok(resp.json().await?)
                } else {
                    let status = resp.status();
                    let body = resp.text().await.unwrap_or_default();

                    Err($crate::error::ApiError::from_body(status, &body).into())
                }
            }
        }
    };
}
