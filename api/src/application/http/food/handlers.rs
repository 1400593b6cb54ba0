pub mod get_food_details;
pub mod get_food_nutrition;
pub mod search_foods;
