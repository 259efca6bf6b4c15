pub mod food_analysis;
pub mod health;
pub mod home;
pub mod server;
