use api::collection::{Collection, CollectionUuid};

use crate::service::{HbMsg, HbMsgResp};

#[derive(Debug)]
pub enum DbMsg {
    // collection messages
    AddCollection {
        resp: HbMsgResp<Option<Collection>>,
        uid: String,
        name: String,
    },
    GetCollection {
        resp: HbMsgResp<Option<Collection>>,
        collection_uuid: CollectionUuid,
    },
    SearchCollections {
        resp: HbMsgResp<Vec<Collection>>,
        uid: String,
        filter: String,
    },
}

impl From<DbMsg> for HbMsg {
    fn from(value: DbMsg) -> Self {
        HbMsg::Db(value)
    }
}
