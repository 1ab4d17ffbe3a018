use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::models::{Account, NewAccount};

/// Sea-ORM Entity for the accounts table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub date_created: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Account {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            phone_number: model.phone_number,
            address: model.address,
            city: model.city,
            state: model.state,
            country: model.country,
            date_created: model.date_created.into(),
        }
    }
}

impl From<NewAccount> for ActiveModel {
    fn from(input: NewAccount) -> Self {
        ActiveModel {
            id: Set(Uuid::now_v7()),
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            email: Set(input.email),
            phone_number: Set(input.phone_number),
            address: Set(input.address),
            city: Set(input.city),
            state: Set(input.state),
            country: Set(input.country),
            date_created: Set(chrono::Utc::now().into()),
        }
    }
}
