pub mod allergen_analysis;
pub mod allergen_profile;
pub mod authentication;
pub mod common;
pub mod crypto;
pub mod food;
pub mod health;
pub mod scan_history;
pub mod user;
