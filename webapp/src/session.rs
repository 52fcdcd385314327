use dioxus::prelude::*;
use tracing::{info, warn};

use api::{
    auth::{GetCurrentUserReq, GetCurrentUserResp, get_current_user},
    error::{ErrorKind, api_error},
};

#[derive(Clone, Debug, PartialEq)]
pub enum SessionStatus {
    Loading,
    Authenticated(String),
    Unauthenticated,
    // the server could not be asked, which is not the same as being told no
    Unavailable(String),
}

pub fn session_status(result: anyhow::Result<GetCurrentUserResp>) -> SessionStatus {
    match result {
        Ok(resp) => SessionStatus::Authenticated(resp.uid),
        Err(err) => match api_error(&err) {
            Some(api_err) if api_err.kind == ErrorKind::Unauthorized => {
                SessionStatus::Unauthenticated
            }
            _ => SessionStatus::Unavailable(err.to_string()),
        },
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SessionGateProps {
    children: Element,
}

// renders its children only once the server has confirmed who we are
#[component]
pub fn SessionGate(props: SessionGateProps) -> Element {
    let session = use_resource(|| async move {
        let status = session_status(get_current_user(&GetCurrentUserReq {}).await);

        match &status {
            SessionStatus::Authenticated(uid) => info!({ uid = %uid }, "signed in"),
            SessionStatus::Unavailable(err) => warn!({ error = %err }, "failed to fetch current user"),
            _ => (),
        }

        status
    });

    let status = session
        .read()
        .clone()
        .unwrap_or(SessionStatus::Loading);

    match status {
        SessionStatus::Loading => rsx! {
            div { class: "loading-state centered",
                div { class: "loader" }
            }
        },
        SessionStatus::Authenticated(_) => rsx! {
            {props.children}
        },
        SessionStatus::Unauthenticated => rsx! {
            div { class: "container notice",
                h1 { "Sign in required" }
                p { "You need to sign in before you can see your collections." }
            }
        },
        SessionStatus::Unavailable(message) => rsx! {
            div { class: "container error-state",
                h1 { "Unable to reach the server" }
                p { "{message}" }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::error::ApiError;

    #[test]
    fn classifies_the_current_user_response() {
        assert_eq!(
            session_status(Ok(GetCurrentUserResp {
                uid: String::from("alice")
            })),
            SessionStatus::Authenticated(String::from("alice"))
        );

        assert_eq!(
            session_status(Err(ApiError::new(ErrorKind::Unauthorized, "not signed in").into())),
            SessionStatus::Unauthenticated
        );

        assert_eq!(
            session_status(Err(anyhow::Error::msg("connection refused"))),
            SessionStatus::Unavailable(String::from("connection refused"))
        );
    }
}
