use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::recipe::{CreateTagDto, TagDto},
    server::{data::tag::TagRepository, error::Error, service::validation},
};

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    /// Creates a new instance of [`TagService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the tags of a user, ordered by name descending
    pub async fn list(&self, user_id: i32) -> Result<Vec<TagDto>, Error> {
        let tags = TagRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;

        Ok(tags.into_iter().map(TagDto::from).collect())
    }

    /// Creates a tag owned by the user, the name is required and trimmed
    pub async fn create(&self, user_id: i32, payload: CreateTagDto) -> Result<TagDto, Error> {
        let name = validation::required_text(payload.name, "name")?;

        let tag = TagRepository::new(self.db).create(user_id, name).await?;
        tracing::debug!(user_id = %user_id, tag_id = %tag.id, "Created tag");

        Ok(TagDto::from(tag))
    }
}
