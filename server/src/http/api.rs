use std::sync::Arc;

use axum::{
    extract::{Extension, Json, State},
    response::{IntoResponse, Response},
};
use tracing::{info, instrument};

use crate::{
    db::msg::DbMsg,
    http::{AppError, auth::CurrentUser, svc::HttpEndpoint},
};
use api::{
    auth::*,
    collection::*,
    error::{ApiError, ErrorKind},
    validate_collection_name,
};

// http api endpoints
//
// the endpoints are one-to-one with the database service messages, but it is
// the http service's job to enforce the auth policy: the db service only ever
// sees the uid that the middleware authenticated, and never decides who may
// read what

// auth handlers
#[instrument(skip_all)]
pub(super) async fn get_current_user(
    Extension(current_user): Extension<CurrentUser>,
    Json(_message): Json<GetCurrentUserReq>,
) -> Result<Response, AppError> {
    Ok(Json(GetCurrentUserResp {
        uid: current_user.uid,
    })
    .into_response())
}

// collection handlers
#[instrument(skip_all)]
pub(super) async fn add_collection(
    State(state): State<Arc<HttpEndpoint>>,
    Extension(current_user): Extension<CurrentUser>,
    Json(message): Json<AddCollectionReq>,
) -> Result<Response, AppError> {
    let uid = current_user.uid.clone();

    // the webapp validates too, but it is not the only possible client
    let name = validate_collection_name(&message.name)
        .map_err(|msg| ApiError::new(ErrorKind::Validation, msg))?;

    let (tx, rx) = tokio::sync::oneshot::channel();

    state
        .db_svc_sender
        .send(
            DbMsg::AddCollection {
                resp: tx,
                uid: uid.clone(),
                name: name.clone(),
            }
            .into(),
        )
        .await?;

    let collection = rx
        .await??
        .ok_or_else(|| ApiError::duplicate_name(&name))?;

    info!({uid = %uid, collection_uuid = collection.collection_uuid}, "created collection");

    Ok(Json(AddCollectionResp { collection }).into_response())
}

#[instrument(skip_all)]
pub(super) async fn get_collection(
    State(state): State<Arc<HttpEndpoint>>,
    Extension(current_user): Extension<CurrentUser>,
    Json(message): Json<GetCollectionReq>,
) -> Result<Response, AppError> {
    let (tx, rx) = tokio::sync::oneshot::channel();

    state
        .db_svc_sender
        .send(
            DbMsg::GetCollection {
                resp: tx,
                collection_uuid: message.collection_uuid,
            }
            .into(),
        )
        .await?;

    // someone else's collection looks exactly like a missing one
    let collection = rx
        .await??
        .filter(|collection| collection.uid == current_user.uid)
        .ok_or_else(|| ApiError::new(ErrorKind::NotFound, "unknown collection_uuid"))?;

    Ok(Json(GetCollectionResp { collection }).into_response())
}

#[instrument(skip_all)]
pub(super) async fn search_collections(
    State(state): State<Arc<HttpEndpoint>>,
    Extension(current_user): Extension<CurrentUser>,
    Json(message): Json<SearchCollectionsReq>,
) -> Result<Response, AppError> {
    let (tx, rx) = tokio::sync::oneshot::channel();

    state
        .db_svc_sender
        .send(
            DbMsg::SearchCollections {
                resp: tx,
                uid: current_user.uid.clone(),
                filter: message.filter,
            }
            .into(),
        )
        .await?;

    let result = rx.await??;

    Ok(Json(SearchCollectionsResp {
        collections: result,
    })
    .into_response())
}
