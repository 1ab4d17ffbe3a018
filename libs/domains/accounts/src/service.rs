use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AccountError, AccountResult};
use crate::models::{Account, AccountPatch, CreateAccount, NewAccount, UpdateAccount};
use crate::repository::AccountRepository;

/// Validation and normalization in front of an [`AccountRepository`].
#[derive(Clone)]
pub struct AccountService<R: AccountRepository> {
    repository: Arc<R>,
}

/// Ids arrive as raw path text. Blank ids are a validation error; anything
/// that is not a UUID cannot name a stored account.
fn parse_id(id: &str) -> AccountResult<Uuid> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AccountError::Validation("id is required".to_string()));
    }
    Uuid::parse_str(id).map_err(|_| AccountError::NotFound(id.to_string()))
}

fn require(value: &str, field: &str) -> AccountResult<()> {
    if value.is_empty() {
        return Err(AccountError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

impl<R: AccountRepository> AccountService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn create_account(&self, input: CreateAccount) -> AccountResult<Account> {
        let new_account = NewAccount::from(input.clone());

        require(&new_account.first_name, "firstName")?;
        require(&new_account.last_name, "lastName")?;
        require(&new_account.email, "email")?;

        input
            .validate()
            .map_err(|e| AccountError::Validation(e.to_string()))?;

        if self
            .repository
            .find_by_email(&new_account.email)
            .await?
            .is_some()
        {
            tracing::warn!("Rejected account creation with an existing email");
            return Err(AccountError::DuplicateEmail(new_account.email));
        }

        let account = self.repository.create(new_account).await?;

        tracing::info!(account_id = %account.id, "Created account");
        Ok(account)
    }

    pub async fn get_accounts(&self) -> AccountResult<Vec<Account>> {
        let accounts = self.repository.find_all().await?;
        tracing::debug!(count = accounts.len(), "Listed accounts");
        Ok(accounts)
    }

    pub async fn get_account_by_id(&self, id: &str) -> AccountResult<Account> {
        let uuid = parse_id(id)?;
        tracing::debug!(account_id = %uuid, "Looking up account");

        self.repository
            .find_by_id(uuid)
            .await?
            .ok_or_else(|| AccountError::NotFound(id.to_string()))
    }

    /// Merge the string fields present in `input` into the stored account.
    pub async fn update_account(&self, id: &str, input: UpdateAccount) -> AccountResult<Account> {
        let existing = self.get_account_by_id(id).await?;

        input
            .validate()
            .map_err(|e| AccountError::Validation(e.to_string()))?;

        let patch = AccountPatch::from(input);

        if let Some(ref first_name) = patch.first_name {
            require(first_name, "firstName")?;
        }
        if let Some(ref last_name) = patch.last_name {
            require(last_name, "lastName")?;
        }
        if let Some(ref email) = patch.email {
            require(email, "email")?;

            if *email != existing.email {
                let owner = self.repository.find_by_email(email).await?;
                if owner.is_some_and(|other| other.id != existing.id) {
                    tracing::warn!(account_id = %existing.id, "Rejected update to an email owned by another account");
                    return Err(AccountError::DuplicateEmail(email.clone()));
                }
            }
        }

        let account = self.repository.update(existing.id, patch).await?;

        tracing::info!(account_id = %account.id, "Updated account");
        Ok(account)
    }

    /// Remove an account, returning its last state.
    pub async fn delete_account(&self, id: &str) -> AccountResult<Account> {
        let existing = self.get_account_by_id(id).await?;

        let account = self.repository.delete(existing.id).await?;

        tracing::info!(account_id = %account.id, "Deleted account");
        Ok(account)
    }
}
