//! # FileGate API Client
//!
//! A Rust client for the FileGate cloud file-sharing API with automatic
//! token refresh support.
//!
//! ## Features
//!
//! - OAuth2 session management with automatic access token refresh
//! - Typed errors keyed by HTTP status
//! - One adapter trait per API resource family
//! - Schema-validated request/response models
//!
//! ## Example
//!
//! ```no_run
//! use filegate_api::{Client, ClientConfig};
//! use filegate_api::api::GroupsApi;
//! use filegate_api::models::common::ListParams;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("https://your-filegate-instance.com")?
//!         .with_credentials("client_id", "client_secret");
//!     let client = Client::new(config);
//!
//!     // Establish a session - tokens are stored and refreshed automatically
//!     client.connect_password("user@example.com", "password").await?;
//!
//!     let groups = client.list_groups(&ListParams::new().with_limit(50)).await?;
//!     for group in groups.items {
//!         println!("{} ({} members)", group.name, group.cnt_users);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod models;

pub use client::{Client, ClientConfig, RequestOptions};
pub use error::{ApiError, ApiResult};
