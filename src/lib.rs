pub mod config;
pub mod due;
pub mod error;
pub mod models;
pub mod query;
pub mod seed;
pub mod services;
pub mod state;
pub mod store;
