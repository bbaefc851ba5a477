pub mod care;
pub mod config;
pub mod pets;
pub mod time;
