use serde::{Deserialize, Serialize};

use crate::endpoint;

// structs and types

pub type CollectionUuid = i64;

// a named folder of hints belonging to a single user
//
// uid and mtime are set by the server when the collection is created,
// so clients only ever supply the name
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Collection {
    pub collection_uuid: CollectionUuid,
    pub uid: String,
    pub name: String,
    pub mtime: i64,
}

// messages

// create a new collection
//
// fails with ErrorKind::DuplicateName if the user already has a
// collection with this name
endpoint!(AddCollection);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AddCollectionReq {
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AddCollectionResp {
    pub collection: Collection,
}

// get details on a collection
endpoint!(GetCollection);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GetCollectionReq {
    pub collection_uuid: CollectionUuid,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GetCollectionResp {
    pub collection: Collection,
}

// search collections
//
// defaults to "", which matches everything
endpoint!(SearchCollections);

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SearchCollectionsReq {
    pub filter: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SearchCollectionsResp {
    pub collections: Vec<Collection>,
}

// split a filter into the lowercase terms that must all appear in a name
pub fn filter_terms(filter: &str) -> Vec<String> {
    filter
        .split_whitespace()
        .map(|s| s.to_lowercase())
        .collect()
}

pub fn name_matches(name: &str, terms: &[String]) -> bool {
    let name = name.to_lowercase();

    terms.iter().all(|term| name.contains(term.as_str()))
}
