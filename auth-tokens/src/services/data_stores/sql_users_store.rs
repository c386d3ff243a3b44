use chrono::{DateTime, Utc};
use uuid::Uuid;
use welds::connections::any::AnyClient;
use welds::prelude::DbState;

use crate::domain::data_stores::{ModelConverter, RepositoryError, UserStore, UserStoreError};
use crate::domain::{Email, User, UserModel};

pub struct SqlUserStore {
    client: AnyClient,
}

impl SqlUserStore {
    pub fn new(client: AnyClient) -> Self {
        Self { client }
    }

    async fn find_model_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<DbState<UserModel>>, RepositoryError> {
        let rows = UserModel::where_col(|u| u.email.equal(email.as_ref()))
            .limit(1)
            .run(&self.client)
            .await
            .map_err(RepositoryError::database)?;
        Ok(rows.into_iter().next())
    }

    async fn find_model_by_user_id(
        &self,
        id: Uuid,
    ) -> Result<Option<DbState<UserModel>>, RepositoryError> {
        let rows = UserModel::where_col(|u| u.user_id.equal(id.to_string()))
            .limit(1)
            .run(&self.client)
            .await
            .map_err(RepositoryError::database)?;
        Ok(rows.into_iter().next())
    }
}

pub(crate) fn from_epoch(secs: i64, column: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| RepositoryError::InvalidData(format!("{column} out of range: {secs}")))
}

pub(crate) fn parse_uuid(raw: &str, column: &str) -> Result<Uuid, RepositoryError> {
    Uuid::parse_str(raw)
        .map_err(|_| RepositoryError::InvalidData(format!("{column} is not a uuid: {raw}")))
}

impl ModelConverter<User, UserModel> for SqlUserStore {
    fn to_database_model(user: &User) -> UserModel {
        UserModel {
            // assigned by the database on insert
            id: 0,
            user_id: user.id.to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.as_ref().to_owned(),
            password_hash: user.password_hash.clone(),
            created_at: user.created_at.timestamp(),
            updated_at: user.updated_at.timestamp(),
        }
    }

    fn from_database_model(model: UserModel) -> Result<User, RepositoryError> {
        let email = Email::parse(&model.email)
            .map_err(|_| RepositoryError::InvalidData("invalid email in database".to_owned()))?;
        Ok(User {
            id: parse_uuid(&model.user_id, "users.user_id")?,
            first_name: model.first_name,
            last_name: model.last_name,
            email,
            password_hash: model.password_hash,
            created_at: from_epoch(model.created_at, "users.created_at")?,
            updated_at: from_epoch(model.updated_at, "users.updated_at")?,
        })
    }
}

#[async_trait::async_trait]
impl UserStore for SqlUserStore {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let mut row = DbState::new_uncreated(Self::to_database_model(&user));
        if let Err(e) = row.save(&self.client).await {
            // The unique index on email is the final arbiter between racing sign-ups.
            if self.find_model_by_email(&user.email).await?.is_some() {
                return Err(UserStoreError::UserAlreadyExists);
            }
            log::error!("user insert failed: {e}");
            return Err(RepositoryError::database(e).into());
        }
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        match self.find_model_by_email(email).await? {
            Some(row) => Ok(Some(Self::from_database_model(row.into_inner())?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserStoreError> {
        match self.find_model_by_user_id(id).await? {
            Some(row) => Ok(Some(Self::from_database_model(row.into_inner())?)),
            None => Ok(None),
        }
    }
}
