use async_trait::async_trait;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, SqlErr,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{AccountError, AccountResult},
    models::{Account, AccountPatch, NewAccount},
    repository::AccountRepository,
};

/// Account store on PostgreSQL; the unique index on `email` is authoritative.
#[derive(Clone)]
pub struct PgAccountRepository {
    db: DatabaseConnection,
}

impl PgAccountRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn internal(e: DbErr) -> AccountError {
    AccountError::Internal(format!("Database error: {}", e))
}

/// Writes additionally translate unique violations and untouched rows.
fn write_error(e: DbErr, id: Option<Uuid>, email: Option<&str>) -> AccountError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
        return AccountError::DuplicateEmail(email.unwrap_or_default().to_string());
    }
    match (e, id) {
        (DbErr::RecordNotUpdated, Some(id)) => AccountError::NotFound(id.to_string()),
        (e, _) => internal(e),
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn create(&self, input: NewAccount) -> AccountResult<Account> {
        let email = input.email.clone();
        let model = entity::ActiveModel::from(input)
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, None, Some(&email)))?;

        Ok(model.into())
    }

    async fn find_all(&self) -> AccountResult<Vec<Account>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::DateCreated)
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(internal)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AccountResult<Option<Account>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(internal)?;

        Ok(model.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> AccountResult<Option<Account>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(internal)?;

        Ok(model.map(Into::into))
    }

    async fn update(&self, id: Uuid, patch: AccountPatch) -> AccountResult<Account> {
        if patch.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| AccountError::NotFound(id.to_string()));
        }

        let email = patch.email.clone();
        let mut active = entity::ActiveModel {
            id: Unchanged(id),
            ..Default::default()
        };

        if let Some(first_name) = patch.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = patch.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(email) = patch.email {
            active.email = Set(email);
        }
        if let Some(phone_number) = patch.phone_number {
            active.phone_number = Set(Some(phone_number));
        }
        if let Some(address) = patch.address {
            active.address = Set(Some(address));
        }
        if let Some(city) = patch.city {
            active.city = Set(Some(city));
        }
        if let Some(state) = patch.state {
            active.state = Set(Some(state));
        }
        if let Some(country) = patch.country {
            active.country = Set(Some(country));
        }

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| write_error(e, Some(id), email.as_deref()))?;

        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> AccountResult<Account> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AccountError::NotFound(id.to_string()))?;

        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(internal)?;

        if result.rows_affected == 0 {
            return Err(AccountError::NotFound(id.to_string()));
        }

        Ok(existing)
    }
}
