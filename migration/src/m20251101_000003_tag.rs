use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_pantry_user::PantryUser;

static IDX_TAG_USER_ID: &str = "idx-tag-user_id";
static FK_TAG_USER_ID: &str = "fk-tag-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tag::Table)
                    .if_not_exists()
                    .col(pk_auto(Tag::Id))
                    .col(string_len(Tag::Name, 255))
                    .col(integer(Tag::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TAG_USER_ID)
                            .from(Tag::Table, Tag::UserId)
                            .to(PantryUser::Table, PantryUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TAG_USER_ID)
                    .table(Tag::Table)
                    .col(Tag::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TAG_USER_ID)
                    .table(Tag::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Tag::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Tag {
    Table,
    Id,
    Name,
    UserId,
}
