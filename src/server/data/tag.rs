use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct TagRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagRepository<'a, C> {
    /// Creates a new instance of [`TagRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, name: String) -> Result<entity::tag::Model, DbErr> {
        let tag = entity::tag::ActiveModel {
            name: ActiveValue::Set(name),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        };

        tag.insert(self.db).await
    }

    /// Gets all tags owned by the user, ordered by name descending
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find()
            .filter(entity::tag::Column::UserId.eq(user_id))
            .order_by_desc(entity::tag::Column::Name)
            .all(self.db)
            .await
    }
}
