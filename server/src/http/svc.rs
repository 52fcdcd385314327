use std::{net::SocketAddr, path::Path, sync::Arc};

use anyhow::Context;
use async_cell::sync::AsyncCell;
use async_trait::async_trait;
use axum::{
    Router,
    extract::Request,
    middleware,
    routing::post,
};
use tower::Service;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{debug, info, instrument, warn};

use crate::http::{
    api,
    auth::{Authenticator, authenticate},
};
use crate::service::{HbMsgSender, HbRegistry, HbService, ServiceType};
use ::api::API_ROOT;
use common::config::HbConfig;

// state shared by all of the axum handlers
#[derive(Clone, Debug)]
pub struct HttpEndpoint {
    pub(super) db_svc_sender: HbMsgSender,
}

impl HttpEndpoint {
    pub fn new(_config: Arc<HbConfig>, registry: HbRegistry) -> anyhow::Result<Self> {
        Ok(HttpEndpoint {
            db_svc_sender: registry.get(&ServiceType::Db)?,
        })
    }
}

pub struct HttpService {
    config: Arc<HbConfig>,
    hyper_handle: AsyncCell<tokio::task::JoinHandle<anyhow::Result<()>>>,
}

#[async_trait]
impl HbService for HttpService {
    fn create(config: Arc<HbConfig>, _registry: &HbRegistry) -> anyhow::Result<Self> {
        Ok(HttpService {
            config: config.clone(),
            hyper_handle: AsyncCell::new(),
        })
    }

    #[instrument(skip(self, registry))]
    async fn start(&self, registry: &HbRegistry) -> anyhow::Result<()> {
        info!("starting http service");

        let config = self.config.clone();

        let state = Arc::new(HttpEndpoint::new(config.clone(), registry.clone())?);
        let authenticator = Arc::new(Authenticator::from_config(&config)?);

        let socket: SocketAddr = config
            .http
            .socket
            .parse()
            .with_context(|| format!("invalid http socket {}", config.http.socket))?;

        // fail startup rather than the background task if the socket is in use
        let listener = tokio::net::TcpListener::bind(socket)
            .await
            .with_context(|| format!("failed to bind {socket}"))?;

        let router = router(state, authenticator, &config.http.doc_root);

        let hyper_handle = tokio::task::spawn(serve_http(listener, router));

        self.hyper_handle.set(hyper_handle);

        debug!({ socket = %socket }, "started http service");

        Ok(())
    }
}

// the api lives under API_ROOT, and everything else is the webapp
//
// unknown paths fall back to index.html so that the client-side router can
// handle deep links like /collections/42
pub fn router(state: Arc<HttpEndpoint>, authenticator: Arc<Authenticator>, doc_root: &Path) -> Router {
    let api_router = Router::new()
        .route("/GetCurrentUser", post(api::get_current_user))
        .route("/AddCollection", post(api::add_collection))
        .route("/GetCollection", post(api::get_collection))
        .route("/SearchCollections", post(api::search_collections))
        .route_layer(middleware::from_fn_with_state(authenticator, authenticate))
        .with_state(state);

    let app_service =
        ServeDir::new(doc_root).fallback(ServeFile::new(doc_root.join("index.html")));

    Router::new()
        .nest(API_ROOT, api_router)
        .fallback_service(app_service)
        .layer(TraceLayer::new_for_http())
}

async fn serve_http(listener: tokio::net::TcpListener, router: Router) -> anyhow::Result<()> {
    let service = hyper::service::service_fn(move |request: Request<hyper::body::Incoming>| {
        router.clone().call(request)
    });

    // the main http server loop
    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(conn) => conn,
            Err(err) => {
                warn!({ error = %err }, "failed to accept connection");
                continue;
            }
        };

        let service = service.clone();

        let io = hyper_util::rt::TokioIo::new(stream);

        tokio::task::spawn(async move {
            match hyper_util::server::conn::auto::Builder::new(hyper_util::rt::TokioExecutor::new())
                .serve_connection(io, service)
                .await
            {
                Ok(()) => (),
                Err(err) => debug!({ peer = %peer, error = %err }, "connection closed with error"),
            }
        });
    }
}
