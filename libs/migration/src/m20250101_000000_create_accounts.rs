use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(pk_uuid(Accounts::Id))
                    .col(string_len(Accounts::FirstName, 255))
                    .col(string_len(Accounts::LastName, 255))
                    .col(string_len_uniq(Accounts::Email, 255))
                    .col(string_len_null(Accounts::PhoneNumber, 255))
                    .col(string_len_null(Accounts::Address, 255))
                    .col(string_len_null(Accounts::City, 255))
                    .col(string_len_null(Accounts::State, 255))
                    .col(string_len_null(Accounts::Country, 255))
                    .col(
                        timestamp_with_time_zone(Accounts::DateCreated)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // List endpoint orders by creation time
        manager
            .create_index(
                Index::create()
                    .name("idx_accounts_date_created")
                    .table(Accounts::Table)
                    .col(Accounts::DateCreated)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Address,
    City,
    State,
    Country,
    DateCreated,
}
