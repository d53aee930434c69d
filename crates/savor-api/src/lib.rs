// savor-api: Async Rust client for the Savor restaurant back-office REST API

pub mod auth;
pub mod chat;
pub mod client;
pub mod error;
pub mod foods;
pub mod models;
pub mod orders;
pub mod restaurant;
pub mod reviews;
pub mod stats;
pub mod transport;
pub mod vouchers;

pub use client::ApiClient;
pub use error::Error;
