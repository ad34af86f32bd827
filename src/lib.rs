pub mod config;
pub mod db;
pub mod locator;
pub mod models;
