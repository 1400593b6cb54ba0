pub mod allergen_profile_repository;
