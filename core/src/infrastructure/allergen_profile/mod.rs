pub mod mappers;
pub mod repositories;

pub use repositories::allergen_profile_repository::PostgresAllergenProfileRepository;
