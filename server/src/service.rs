use std::{future::Future, sync::Arc};

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use tokio;

use common::config::HbConfig;

// these are the services that receive messages in the hintbox server backend
//
// the http service only sends, so it has no entry here
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ServiceType {
    Db,
}

// Hintbox Service Messages
//
// without higher-kinded types, we use the normal enum-of-enums
// to enable general safe message passing between services
pub type HbMsgSender = tokio::sync::mpsc::Sender<HbMsg>;
pub type HbMsgReceiver = tokio::sync::mpsc::Receiver<HbMsg>;

// message responses are carried back via oneshot channels.  this
// type eliminates quite a bit of boilerplate in the responder logic.
pub type HbMsgResp<T> = tokio::sync::oneshot::Sender<Result<T>>;

#[derive(Debug)]
pub enum HbMsg {
    Db(crate::db::msg::DbMsg),
}

// service registry
//
// currently, we assume that each service will be instantiated once, and that there
// should be one message namespace.  services clone the sender they need out of the
// registry once, when their inner state is created.
#[derive(Clone, Debug)]
pub struct HbRegistry(Arc<DashMap<ServiceType, HbMsgSender>>);

impl HbRegistry {
    pub fn new() -> Self {
        HbRegistry(Arc::new(DashMap::new()))
    }

    pub fn insert(&self, k: ServiceType, v: HbMsgSender) -> Result<()> {
        match self.0.insert(k.clone(), v) {
            None => Ok(()),
            Some(w) => {
                self.0.insert(k, w);
                Err(anyhow::Error::msg(
                    "internal error: a sender was added twice to the registry",
                ))
            }
        }
    }

    pub fn get(&self, k: &ServiceType) -> Result<HbMsgSender> {
        Ok(self
            .0
            .get(k)
            .ok_or_else(|| {
                anyhow::Error::msg(format!(
                    "internal error: a service was started without a necessary dependency ({:?})",
                    k
                ))
            })?
            .clone())
    }
}

// core service trait
//
// create() registers whatever senders the service owns, and start() spawns its
// tasks once every service has been created
#[async_trait]
pub trait HbService: Send + Sync + 'static {
    fn create(config: Arc<HbConfig>, registry: &HbRegistry) -> Result<Self>
    where
        Self: Sized;

    async fn start(&self, registry: &HbRegistry) -> Result<()>;
}

// service message responder
//
// in the spirit of tower, the magic of the service model is in the message_handler
// rpc function.  services may respond to external messages on other channels (http) as well.
#[async_trait]
pub trait HbInner: Sized + Send + Sync + 'static {
    fn new(config: Arc<HbConfig>, registry: HbRegistry) -> Result<Self>;

    async fn message_handler(&self, msg: HbMsg) -> Result<()>;

    // rather than have the inner service trait functions (i.e., the rpc calls) respond directly,
    // we define this helper function for use in the message_handler loop
    async fn respond<T, Fut>(&self, resp: HbMsgResp<T>, fut: Fut) -> Result<()>
    where
        T: Send + Sync,
        Fut: Future<Output = Result<T>> + Send,
    {
        resp.send(fut.await).map_err(|_| {
            anyhow::Error::msg(format!(
                "failed to respond to a {} message",
                std::any::type_name::<T>()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_rejects_second_sender() {
        let registry = HbRegistry::new();

        let (tx1, _rx1) = tokio::sync::mpsc::channel::<HbMsg>(1);
        let (tx2, _rx2) = tokio::sync::mpsc::channel::<HbMsg>(1);

        registry.insert(ServiceType::Db, tx1.clone()).unwrap();
        assert!(registry.insert(ServiceType::Db, tx2).is_err());

        // the original sender survives the failed insert
        assert!(registry.get(&ServiceType::Db).unwrap().same_channel(&tx1));
    }

    #[test]
    fn registry_reports_missing_dependency() {
        let registry = HbRegistry::new();

        let err = registry.get(&ServiceType::Db).unwrap_err();
        assert!(err.to_string().contains("Db"));
    }
}
