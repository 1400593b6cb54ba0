pub mod get_allergens;
pub mod get_profile;
pub mod update_allergens;
pub mod update_profile;
