use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AccountError, AccountResult};
use crate::models::{Account, AccountPatch, NewAccount};

/// Store operations behind the account service.
///
/// Implementations report a violated email uniqueness as
/// [`AccountError::DuplicateEmail`] and a write that touched no row as
/// [`AccountError::NotFound`]. Every other failure is
/// [`AccountError::Internal`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create(&self, input: NewAccount) -> AccountResult<Account>;

    async fn find_all(&self) -> AccountResult<Vec<Account>>;

    async fn find_by_id(&self, id: Uuid) -> AccountResult<Option<Account>>;

    /// Exact match on the stored (normalized) email
    async fn find_by_email(&self, email: &str) -> AccountResult<Option<Account>>;

    /// Apply `patch` and return the updated account
    async fn update(&self, id: Uuid, patch: AccountPatch) -> AccountResult<Account>;

    /// Remove the account and return its last state
    async fn delete(&self, id: Uuid) -> AccountResult<Account>;
}

/// In-memory implementation of AccountRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_taken(accounts: &HashMap<Uuid, Account>, email: &str, except: Option<Uuid>) -> bool {
    accounts
        .values()
        .any(|a| Some(a.id) != except && a.email.eq_ignore_ascii_case(email))
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, input: NewAccount) -> AccountResult<Account> {
        let mut accounts = self.accounts.write().await;

        if email_taken(&accounts, &input.email, None) {
            return Err(AccountError::DuplicateEmail(input.email));
        }

        let account = Account {
            id: Uuid::now_v7(),
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone_number: input.phone_number,
            address: input.address,
            city: input.city,
            state: input.state,
            country: input.country,
            date_created: Utc::now(),
        };
        accounts.insert(account.id, account.clone());

        Ok(account)
    }

    async fn find_all(&self) -> AccountResult<Vec<Account>> {
        let accounts = self.accounts.read().await;

        let mut result: Vec<Account> = accounts.values().cloned().collect();
        result.sort_by(|a, b| a.date_created.cmp(&b.date_created).then(a.id.cmp(&b.id)));

        Ok(result)
    }

    async fn find_by_id(&self, id: Uuid) -> AccountResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AccountResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }

    async fn update(&self, id: Uuid, patch: AccountPatch) -> AccountResult<Account> {
        let mut accounts = self.accounts.write().await;

        if !accounts.contains_key(&id) {
            return Err(AccountError::NotFound(id.to_string()));
        }

        if let Some(ref email) = patch.email {
            if email_taken(&accounts, email, Some(id)) {
                return Err(AccountError::DuplicateEmail(email.clone()));
            }
        }

        let account = accounts
            .get_mut(&id)
            .ok_or_else(|| AccountError::NotFound(id.to_string()))?;
        patch.apply_to(account);

        Ok(account.clone())
    }

    async fn delete(&self, id: Uuid) -> AccountResult<Account> {
        let mut accounts = self.accounts.write().await;
        accounts
            .remove(&id)
            .ok_or_else(|| AccountError::NotFound(id.to_string()))
    }
}
