// Library exports for testing and modular access

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repository;

pub use db::Database;
pub use error::{DbError, Result};
