use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_pantry_user::PantryUser;

static FK_AUTH_TOKEN_USER_ID: &str = "fk-pantry_auth_token-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PantryAuthToken::Table)
                    .if_not_exists()
                    .col(string_len(PantryAuthToken::Key, 40).primary_key())
                    .col(integer_uniq(PantryAuthToken::UserId))
                    .col(timestamp(PantryAuthToken::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_AUTH_TOKEN_USER_ID)
                            .from(PantryAuthToken::Table, PantryAuthToken::UserId)
                            .to(PantryUser::Table, PantryUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PantryAuthToken::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PantryAuthToken {
    Table,
    Key,
    UserId,
    CreatedAt,
}
