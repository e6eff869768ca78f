pub mod builder;
pub mod rail;
pub mod types;
