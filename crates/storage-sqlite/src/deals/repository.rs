use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;

use dealwarehouse_core::deals::{FxDeal, FxDealRepositoryTrait, NewFxDeal};
use dealwarehouse_core::Result;

use super::model::{FxDealDB, NewFxDealDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::deals;

pub struct FxDealRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl FxDealRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        FxDealRepository { pool, writer }
    }
}

#[async_trait]
impl FxDealRepositoryTrait for FxDealRepository {
    fn exists_by_id(&self, deal_id: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let exists = diesel::select(diesel::dsl::exists(deals::table.find(deal_id)))
            .get_result::<bool>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(exists)
    }

    fn find_by_id(&self, deal_id: &str) -> Result<Option<FxDeal>> {
        let mut conn = get_connection(&self.pool)?;
        let row = deals::table
            .find(deal_id)
            .select(FxDealDB::as_select())
            .first::<FxDealDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        match row {
            Some(row) => Ok(Some(FxDeal::try_from(row)?)),
            None => Ok(None),
        }
    }

    /// Inserts the deal. A second insert of the same ID fails on the primary
    /// key and comes back as `DatabaseError::UniqueViolation`.
    async fn save(&self, new_deal: NewFxDeal) -> Result<FxDeal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<FxDeal> {
                let row: NewFxDealDB = new_deal.into();
                let stored = diesel::insert_into(deals::table)
                    .values(&row)
                    .returning(FxDealDB::as_returning())
                    .get_result::<FxDealDB>(conn)
                    .map_err(StorageError::from)?;
                debug!("Inserted deal {} at {}", stored.id, stored.created_at);
                Ok(FxDeal::try_from(stored)?)
            })
            .await
    }
}
