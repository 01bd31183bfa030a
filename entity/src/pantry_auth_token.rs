use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pantry_auth_token")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    #[sea_orm(unique)]
    pub user_id: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pantry_user::Entity",
        from = "Column::UserId",
        to = "super::pantry_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    PantryUser,
}

impl Related<super::pantry_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PantryUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
