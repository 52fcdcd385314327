use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::config::HbConfig;
use api::collection::{Collection, CollectionUuid};

pub mod mariadb;
pub use mariadb::MariaDBBackend;

pub mod memory;
pub use memory::MemoryBackend;

// these are the database RPC calls that any backend server must be able to process
//
// backends do no authorization of their own; the http service decides who may
// call what, and passes the authenticated uid through
#[async_trait]
pub trait DbBackend: Send + Sync + 'static {
    fn new(config: Arc<HbConfig>) -> Result<Self>
    where
        Self: Sized;

    // create tables and the like, called once when the db service starts
    async fn init(&self) -> Result<()>;

    // collection functions

    // returns None if the user already owns a collection with this name
    // (compared case-insensitively), in which case nothing is written
    async fn add_collection(&self, uid: String, name: String) -> Result<Option<Collection>>;

    async fn get_collection(&self, collection_uuid: CollectionUuid)
    -> Result<Option<Collection>>;

    // all of the user's collections whose names contain every term of the
    // filter, in display order
    async fn search_collections(&self, uid: String, filter: String) -> Result<Vec<Collection>>;
}

// display order for search results, shared so that every backend agrees
pub fn sort_collections(collections: &mut [Collection]) {
    collections.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then(a.collection_uuid.cmp(&b.collection_uuid))
    });
}
