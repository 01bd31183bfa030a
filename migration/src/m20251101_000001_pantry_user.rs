use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PantryUser::Table)
                    .if_not_exists()
                    .col(pk_auto(PantryUser::Id))
                    .col(string_len_uniq(PantryUser::Email, 255))
                    .col(string(PantryUser::Password))
                    .col(string_len(PantryUser::Name, 255))
                    .col(boolean(PantryUser::IsActive).default(true))
                    .col(boolean(PantryUser::IsStaff).default(false))
                    .col(boolean(PantryUser::IsSuperuser).default(false))
                    .col(timestamp(PantryUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PantryUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PantryUser {
    Table,
    Id,
    Email,
    Password,
    Name,
    IsActive,
    IsStaff,
    IsSuperuser,
    CreatedAt,
}
