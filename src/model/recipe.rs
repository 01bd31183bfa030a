use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TagDto {
    pub id: i32,
    pub name: String,
}

impl From<entity::tag::Model> for TagDto {
    fn from(tag: entity::tag::Model) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateTagDto {
    pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientDto {
    pub id: i32,
    pub name: String,
}

impl From<entity::ingredient::Model> for IngredientDto {
    fn from(ingredient: entity::ingredient::Model) -> Self {
        Self {
            id: ingredient.id,
            name: ingredient.name,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateIngredientDto {
    pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeDto {
    pub id: i32,
    pub title: String,
    pub time_minutes: i32,
    /// Price serialized as a string with two decimal places, e.g. `"5.00"`
    pub price: Decimal,
}

impl From<entity::recipe::Model> for RecipeDto {
    fn from(recipe: entity::recipe::Model) -> Self {
        let mut price = recipe.price;
        price.rescale(2);

        Self {
            id: recipe.id,
            title: recipe.title,
            time_minutes: recipe.time_minutes,
            price,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateRecipeDto {
    pub title: Option<String>,
    pub time_minutes: Option<i32>,
    pub price: Option<Decimal>,
}
