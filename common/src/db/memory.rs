use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};

use anyhow::Result;
use async_trait::async_trait;
use chrono::Local;
use dashmap::DashMap;
use tracing::{debug, info, instrument};

use crate::{
    config::HbConfig,
    db::{DbBackend, sort_collections},
};
use api::collection::{Collection, CollectionUuid, filter_terms, name_matches};

// in-memory backend
//
// collections are grouped by owner so that the duplicate check and the
// insert happen under the same shard lock
pub struct MemoryBackend {
    collections: DashMap<String, Vec<Collection>>,
    next_uuid: AtomicI64,
}

impl MemoryBackend {
    pub fn empty() -> Self {
        MemoryBackend {
            collections: DashMap::new(),
            next_uuid: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl DbBackend for MemoryBackend {
    fn new(_config: Arc<HbConfig>) -> Result<Self> {
        info!("creating in-memory collection store");

        Ok(MemoryBackend::empty())
    }

    async fn init(&self) -> Result<()> {
        Ok(())
    }

    #[instrument(skip_all)]
    async fn add_collection(&self, uid: String, name: String) -> Result<Option<Collection>> {
        debug!({ collection_name = %name }, "adding collection");

        let mut owned = self.collections.entry(uid.clone()).or_default();

        let lowered = name.to_lowercase();

        if owned.iter().any(|c| c.name.to_lowercase() == lowered) {
            debug!({ collection_name = %name }, "collection name already in use");
            return Ok(None);
        }

        let collection = Collection {
            collection_uuid: self.next_uuid.fetch_add(1, Ordering::Relaxed),
            uid,
            name,
            mtime: Local::now().timestamp(),
        };

        owned.push(collection.clone());

        debug!({ collection_uuid = collection.collection_uuid }, "added collection");

        Ok(Some(collection))
    }

    #[instrument(skip_all)]
    async fn get_collection(
        &self,
        collection_uuid: CollectionUuid,
    ) -> Result<Option<Collection>> {
        debug!(
            { collection_uuid = collection_uuid },
            "getting collection details"
        );

        Ok(self.collections.iter().find_map(|owned| {
            owned
                .value()
                .iter()
                .find(|c| c.collection_uuid == collection_uuid)
                .cloned()
        }))
    }

    #[instrument(skip_all)]
    async fn search_collections(&self, uid: String, filter: String) -> Result<Vec<Collection>> {
        let terms = filter_terms(&filter);

        let mut data = match self.collections.get(&uid) {
            Some(owned) => owned
                .iter()
                .filter(|c| name_matches(&c.name, &terms))
                .cloned()
                .collect::<Vec<_>>(),
            None => Vec::new(),
        };

        sort_collections(&mut data);

        debug!({ count = data.len() }, "found collections");

        Ok(data)
    }
}
