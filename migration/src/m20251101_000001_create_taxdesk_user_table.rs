use sea_orm_migration::{prelude::*, schema::*};

static IDX_USER_EMAIL: &str = "idx_taxdesk_user_email";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TaxdeskUser::Table)
                    .if_not_exists()
                    .col(string(TaxdeskUser::Id).primary_key())
                    .col(string(TaxdeskUser::Email))
                    .col(string_null(TaxdeskUser::Name))
                    .col(timestamp(TaxdeskUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_EMAIL)
                    .table(TaxdeskUser::Table)
                    .col(TaxdeskUser::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_EMAIL)
                    .table(TaxdeskUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TaxdeskUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TaxdeskUser {
    Table,
    Id,
    Email,
    Name,
    CreatedAt,
}
