use std::fmt;

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tag")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub user_id: i32,
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

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
