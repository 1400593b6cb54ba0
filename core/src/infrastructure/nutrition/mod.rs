pub mod fatsecret_client;
pub mod fatsecret_models;
pub mod oauth;
