use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Local;
use mysql_async::{FromRowError, Pool, Row, Value, from_row_opt, prelude::*};
use tracing::{debug, info, instrument};

use crate::{
    config::HbConfig,
    db::{DbBackend, sort_collections},
};
use api::collection::{Collection, CollectionUuid, filter_terms};

// server error code for a violated unique key
const ER_DUP_ENTRY: u16 = 1062;

// names are stored byte-for-byte and compared on name_key, so uniqueness
// ignores case but not accents, matching the in-memory backend.  the unique
// key backs up the NOT EXISTS check in add_collection when two requests for
// the same name race each other.
const CREATE_COLLECTIONS: &str = r"
    CREATE TABLE IF NOT EXISTS collections (
        collection_uuid BIGINT PRIMARY KEY,
        uid VARCHAR(64) NOT NULL,
        name VARCHAR(64) NOT NULL,
        name_key VARCHAR(64) AS (LOWER(name)) STORED,
        mtime BIGINT NOT NULL,
        UNIQUE KEY uid_name (uid, name_key)
    ) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin";

pub struct MariaDBBackend {
    pool: Pool,
}

#[async_trait]
impl DbBackend for MariaDBBackend {
    fn new(config: Arc<HbConfig>) -> Result<Self> {
        info!("creating MariaDB connection pool");

        let mariadb = config
            .mariadb
            .as_ref()
            .ok_or_else(|| anyhow::Error::msg("missing [config.mariadb] table"))?;

        Ok(Self {
            pool: Pool::new(mariadb.url.as_str()),
        })
    }

    #[instrument(skip_all)]
    async fn init(&self) -> Result<()> {
        debug!("creating collections table");

        CREATE_COLLECTIONS
            .ignore(self.pool.get_conn().await?)
            .await?;

        Ok(())
    }

    // collection queries
    #[instrument(skip_all)]
    async fn add_collection(&self, uid: String, name: String) -> Result<Option<Collection>> {
        debug!({ collection_name = %name }, "adding collection");

        let result = r"
            INSERT INTO collections (collection_uuid, uid, name, mtime)
            SELECT
                UUID_SHORT(),
                :uid,
                :name,
                :mtime
            FROM
                DUAL
            WHERE NOT EXISTS(
                SELECT 1
                FROM collections
                WHERE
                    uid = :uid
                    AND name_key = LOWER(:name)
            )
            RETURNING collection_uuid, uid, name, mtime"
            .with(params! {
                "uid" => uid,
                "name" => name.clone(),
                "mtime" => Local::now().timestamp(),
            })
            .run(self.pool.get_conn().await?)
            .await;

        let result = match result {
            Ok(mut result) => result.collect::<Row>().await,
            Err(err) => Err(err),
        };

        if let Err(mysql_async::Error::Server(err)) = &result {
            if err.code == ER_DUP_ENTRY {
                debug!({ collection_name = %name }, "lost insert race on collection name");
                return Ok(None);
            }
        }

        // an empty result means the NOT EXISTS clause found the name
        let row = match result?.pop() {
            Some(row) => row,
            None => {
                debug!({ collection_name = %name }, "collection name already in use");
                return Ok(None);
            }
        };

        let collection = collection_from_row(row)?;

        debug!({collection_name = %name, collection_uuid = collection.collection_uuid}, "added collection");

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

        let mut result = r"
            SELECT collection_uuid, uid, name, mtime FROM collections WHERE collection_uuid = :collection_uuid"
        .with(params! {
            "collection_uuid" => collection_uuid,
        })
        .run(self.pool.get_conn().await?)
        .await?
        .collect::<Row>()
        .await?;

        let row = match result.pop() {
            Some(row) => row,
            None => return Ok(None),
        };

        Ok(Some(collection_from_row(row)?))
    }

    #[instrument(skip_all)]
    async fn search_collections(&self, uid: String, filter: String) -> Result<Vec<Collection>> {
        let terms = filter_terms(&filter);

        // the number of terms varies, so this one uses positional parameters
        let mut query = String::from(
            r"
            SELECT
                collection_uuid, uid, name, mtime
            FROM
                collections
            WHERE
                uid = ?",
        );

        let mut params = vec![Value::from(uid)];

        for term in terms {
            query.push_str(" AND LOWER(name) LIKE ?");
            params.push(Value::from(format!("%{}%", escape_like(&term))));
        }

        let result = query
            .with(params)
            .run(self.pool.get_conn().await?)
            .await?
            .collect::<Row>()
            .await?;

        let mut data = result
            .into_iter()
            .map(collection_from_row)
            .collect::<Result<Vec<_>, FromRowError>>()?;

        // ORDER BY would depend on the table collation, so sort here instead
        sort_collections(&mut data);

        debug!({ count = data.len() }, "found collections");

        Ok(data)
    }
}

fn collection_from_row(row: Row) -> Result<Collection, FromRowError> {
    let data = from_row_opt::<(CollectionUuid, String, String, i64)>(row)?;

    Ok(Collection {
        collection_uuid: data.0,
        uid: data.1,
        name: data.2,
        mtime: data.3,
    })
}

// the default LIKE escape character is the backslash
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());

    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::{CREATE_COLLECTIONS, escape_like};

    #[test]
    fn names_are_unique_ignoring_case_only() {
        // a binary collation keeps accented names distinct
        assert!(CREATE_COLLECTIONS.contains("CHARACTER SET utf8mb4 COLLATE utf8mb4_bin"));
        assert!(CREATE_COLLECTIONS.contains("name_key VARCHAR(64) AS (LOWER(name)) STORED"));
        assert!(CREATE_COLLECTIONS.contains("UNIQUE KEY uid_name (uid, name_key)"));
    }

    #[test]
    fn escapes_like_wildcards() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("snake_case"), "snake\\_case");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
        assert_eq!(escape_like("plain"), "plain");
    }
}
