pub mod authentication;
pub mod food;
pub mod health;
pub mod history;
pub mod scan;
pub mod server;
pub mod user;
