pub mod client;
pub mod models;

pub use client::FredClient;
pub use models::ApiError;
