use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Upper bound for every text column (`VARCHAR(255)`).
pub const MAX_TEXT_LEN: u64 = 255;

/// A stored account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// Trimmed and lower-cased; unique across accounts
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub date_created: DateTime<Utc>,
}

/// Request body for creating an account.
///
/// Missing or `null` required fields deserialize to empty strings so the
/// service can report which one is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccount {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub email: String,
    #[validate(length(max = MAX_TEXT_LEN))]
    pub phone_number: Option<String>,
    #[validate(length(max = MAX_TEXT_LEN))]
    pub address: Option<String>,
    #[validate(length(max = MAX_TEXT_LEN))]
    pub city: Option<String>,
    #[validate(length(max = MAX_TEXT_LEN))]
    pub state: Option<String>,
    #[validate(length(max = MAX_TEXT_LEN))]
    pub country: Option<String>,
}

/// Request body for updating an account.
///
/// Only fields sent as JSON strings are applied. Absent fields, `null` and
/// values of any other JSON type leave the stored value unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccount {
    #[serde(default, deserialize_with = "string_only")]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "string_only")]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "string_only")]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "string_only")]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "string_only")]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "string_only")]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "string_only")]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "string_only")]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub country: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_only<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Normalized record handed to the store on create.
///
/// Optional fields that are `None` are stored as NULL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl From<CreateAccount> for NewAccount {
    fn from(input: CreateAccount) -> Self {
        Self {
            first_name: input.first_name.trim().to_string(),
            last_name: input.last_name.trim().to_string(),
            email: normalize_email(&input.email),
            phone_number: input.phone_number,
            address: input.address,
            city: input.city,
            state: input.state,
            country: input.country,
        }
    }
}

/// Sparse update: `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl AccountPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(self, account: &mut Account) {
        if let Some(first_name) = self.first_name {
            account.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            account.last_name = last_name;
        }
        if let Some(email) = self.email {
            account.email = email;
        }
        if let Some(phone_number) = self.phone_number {
            account.phone_number = Some(phone_number);
        }
        if let Some(address) = self.address {
            account.address = Some(address);
        }
        if let Some(city) = self.city {
            account.city = Some(city);
        }
        if let Some(state) = self.state {
            account.state = Some(state);
        }
        if let Some(country) = self.country {
            account.country = Some(country);
        }
    }
}

impl From<UpdateAccount> for AccountPatch {
    fn from(input: UpdateAccount) -> Self {
        Self {
            first_name: input.first_name.map(|s| s.trim().to_string()),
            last_name: input.last_name.map(|s| s.trim().to_string()),
            email: input.email.as_deref().map(normalize_email),
            phone_number: input.phone_number,
            address: input.address,
            city: input.city,
            state: input.state,
            country: input.country,
        }
    }
}

/// Canonical form used for storage and uniqueness checks.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
