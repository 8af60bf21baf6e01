//! GitHub REST implementation of the runner inventory fetch.
mod client;
pub use client::GithubInventory;

mod config;
pub use config::{DEFAULT_API_URL, GithubConfig};
