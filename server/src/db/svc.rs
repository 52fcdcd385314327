use std::marker::PhantomData;
use std::sync::Arc;

use async_cell::sync::AsyncCell;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument};

use crate::db::msg::DbMsg;
use crate::service::{HbInner, HbMsg, HbMsgReceiver, HbRegistry, HbService, ServiceType};
use common::config::HbConfig;
use common::db::DbBackend;

pub struct DbService<B: DbBackend> {
    config: Arc<HbConfig>,
    receiver: Arc<Mutex<HbMsgReceiver>>,
    handle: AsyncCell<tokio::task::JoinHandle<anyhow::Result<()>>>,
    backend: PhantomData<B>,
}

#[async_trait]
impl<B: DbBackend> HbService for DbService<B> {
    fn create(config: Arc<HbConfig>, registry: &HbRegistry) -> anyhow::Result<Self> {
        let (tx, rx) = tokio::sync::mpsc::channel::<HbMsg>(1024);

        registry.insert(ServiceType::Db, tx)?;

        Ok(DbService {
            config: config.clone(),
            receiver: Arc::new(Mutex::new(rx)),
            handle: AsyncCell::new(),
            backend: PhantomData::<B>,
        })
    }

    #[instrument(skip(self, registry))]
    async fn start(&self, registry: &HbRegistry) -> anyhow::Result<()> {
        info!("starting db service");

        let receiver = Arc::clone(&self.receiver);
        let state = Arc::new(DbRunner::<B>::new(self.config.clone(), registry.clone())?);

        state.backend.init().await?;

        let serve = {
            async move {
                let mut receiver = receiver.lock().await;

                while let Some(msg) = receiver.recv().await {
                    let state = Arc::clone(&state);
                    tokio::task::spawn(async move {
                        match state.message_handler(msg).await {
                            Ok(()) => (),
                            Err(err) => {
                                error!({service = "db", channel = "msg", error = %err})
                            }
                        }
                    });
                }

                Err::<(), anyhow::Error>(anyhow::Error::msg("channel disconnected"))
            }
        };

        let handle = tokio::task::spawn(serve);

        self.handle.set(handle);

        debug!("started db service");

        Ok(())
    }
}

pub struct DbRunner<B: DbBackend> {
    backend: B,
}

#[async_trait]
impl<B: DbBackend> HbInner for DbRunner<B> {
    fn new(config: Arc<HbConfig>, _registry: HbRegistry) -> anyhow::Result<Self> {
        Ok(DbRunner {
            backend: B::new(config.clone())?,
        })
    }

    async fn message_handler(&self, msg: HbMsg) -> anyhow::Result<()> {
        match msg {
            HbMsg::Db(message) => match message {
                // collection messages
                DbMsg::AddCollection { resp, uid, name } => {
                    self.respond(resp, self.backend.add_collection(uid, name))
                        .await
                }
                DbMsg::GetCollection {
                    resp,
                    collection_uuid,
                } => {
                    self.respond(resp, self.backend.get_collection(collection_uuid))
                        .await
                }
                DbMsg::SearchCollections { resp, uid, filter } => {
                    self.respond(resp, self.backend.search_collections(uid, filter))
                        .await
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{config::parse_config, db::MemoryBackend};

    const MEMORY_CONFIG: &str = r#"
        [config]
        authn_backend = "Static"
        db_backend = "Memory"

        [config.http]
        socket = "127.0.0.1:0"
        doc_root = "/nonexistent"

        [config.static_user]
        uid = "alice"
    "#;

    #[tokio::test]
    async fn answers_messages_over_the_registry() {
        let config = Arc::new(parse_config(MEMORY_CONFIG).unwrap());
        let registry = HbRegistry::new();

        let db_svc = DbService::<MemoryBackend>::create(config, &registry).unwrap();
        db_svc.start(&registry).await.unwrap();

        let sender = registry.get(&ServiceType::Db).unwrap();

        for _ in 0..2 {
            let (tx, rx) = tokio::sync::oneshot::channel();
            sender
                .send(
                    DbMsg::AddCollection {
                        resp: tx,
                        uid: "alice".into(),
                        name: "Work".into(),
                    }
                    .into(),
                )
                .await
                .unwrap();
            let _ = rx.await.unwrap().unwrap();
        }

        let (tx, rx) = tokio::sync::oneshot::channel();
        sender
            .send(
                DbMsg::SearchCollections {
                    resp: tx,
                    uid: "alice".into(),
                    filter: "".into(),
                }
                .into(),
            )
            .await
            .unwrap();

        let found = rx.await.unwrap().unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Work");
    }
}
