pub use sea_orm_migration::prelude::*;

mod m20251101_000001_pantry_user;
mod m20251101_000002_pantry_auth_token;
mod m20251101_000003_tag;
mod m20251101_000004_ingredient;
mod m20251101_000005_recipe;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_pantry_user::Migration),
            Box::new(m20251101_000002_pantry_auth_token::Migration),
            Box::new(m20251101_000003_tag::Migration),
            Box::new(m20251101_000004_ingredient::Migration),
            Box::new(m20251101_000005_recipe::Migration),
        ]
    }
}
