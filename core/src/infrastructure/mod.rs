pub mod allergen_profile;
pub mod crypto;
pub mod db;
pub mod health;
pub mod jwt;
pub mod llm;
pub mod nutrition;
pub mod scan_history;
pub mod user;
