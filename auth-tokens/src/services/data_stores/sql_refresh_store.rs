use uuid::Uuid;
use welds::connections::any::AnyClient;
use welds::prelude::DbState;

use crate::domain::data_stores::{
    ModelConverter, RefreshGrant, RefreshStore, RefreshStoreError, RefreshTokenRecord,
    RepositoryError,
};
use crate::domain::RefreshTokenModel;
use crate::services::data_stores::sql_users_store::{from_epoch, parse_uuid};

/// `refresh_tokens` table. The unique index on `user_id` keeps it at one row per user.
pub struct SqlRefreshStore {
    client: AnyClient,
}

impl SqlRefreshStore {
    pub fn new(client: AnyClient) -> Self {
        Self { client }
    }

    async fn find_model_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<DbState<RefreshTokenModel>>, RepositoryError> {
        let rows = RefreshTokenModel::where_col(|r| r.user_id.equal(user_id.to_string()))
            .limit(1)
            .run(&self.client)
            .await
            .map_err(RepositoryError::database)?;
        Ok(rows.into_iter().next())
    }

    async fn overwrite(
        &self,
        mut row: DbState<RefreshTokenModel>,
        grant: RefreshGrant,
    ) -> Result<RefreshTokenRecord, RepositoryError> {
        let mut record = Self::from_database_model((*row).clone())?;
        record.replace_with(grant);

        row.refresh_token = record.token.clone();
        row.expires_at = record.expires_at.timestamp();
        row.updated_at = record.updated_at.timestamp();
        row.save(&self.client)
            .await
            .map_err(RepositoryError::database)?;
        Ok(record)
    }
}

impl ModelConverter<RefreshTokenRecord, RefreshTokenModel> for SqlRefreshStore {
    fn to_database_model(record: &RefreshTokenRecord) -> RefreshTokenModel {
        RefreshTokenModel {
            id: 0,
            record_id: record.id.to_string(),
            user_id: record.user_id.to_string(),
            refresh_token: record.token.clone(),
            expires_at: record.expires_at.timestamp(),
            created_at: record.created_at.timestamp(),
            updated_at: record.updated_at.timestamp(),
        }
    }

    fn from_database_model(model: RefreshTokenModel) -> Result<RefreshTokenRecord, RepositoryError> {
        Ok(RefreshTokenRecord {
            id: parse_uuid(&model.record_id, "refresh_tokens.record_id")?,
            user_id: parse_uuid(&model.user_id, "refresh_tokens.user_id")?,
            token: model.refresh_token,
            expires_at: from_epoch(model.expires_at, "refresh_tokens.expires_at")?,
            created_at: from_epoch(model.created_at, "refresh_tokens.created_at")?,
            updated_at: from_epoch(model.updated_at, "refresh_tokens.updated_at")?,
        })
    }
}

#[async_trait::async_trait]
impl RefreshStore for SqlRefreshStore {
    async fn upsert(&self, grant: RefreshGrant) -> Result<RefreshTokenRecord, RefreshStoreError> {
        if let Some(row) = self.find_model_by_user(grant.user_id).await? {
            return Ok(self.overwrite(row, grant).await?);
        }

        let record = RefreshTokenRecord::from_grant(grant.clone());
        let mut row = DbState::new_uncreated(Self::to_database_model(&record));
        match row.save(&self.client).await {
            Ok(()) => Ok(record),
            Err(e) => {
                // Another sign-in inserted the user's row first; last writer wins.
                log::debug!("refresh insert for {} lost a race: {e}", grant.user_id);
                let row = self
                    .find_model_by_user(grant.user_id)
                    .await?
                    .ok_or_else(|| RepositoryError::database(e))?;
                Ok(self.overwrite(row, grant).await?)
            }
        }
    }

    async fn find(
        &self,
        user_id: Uuid,
        token: &str,
    ) -> Result<Option<RefreshTokenRecord>, RefreshStoreError> {
        let rows = RefreshTokenModel::where_col(|r| r.user_id.equal(user_id.to_string()))
            .where_col(|r| r.refresh_token.equal(token))
            .limit(1)
            .run(&self.client)
            .await
            .map_err(RepositoryError::database)?;
        match rows.into_iter().next() {
            Some(row) => Ok(Some(Self::from_database_model(row.into_inner())?)),
            None => Ok(None),
        }
    }
}
