pub mod branding;
pub mod config;
pub mod groups;
pub mod reports;
pub mod shares;
pub mod user;

// Re-export for convenience
pub use branding::BrandingApi;
pub use config::ConfigApi;
pub use groups::GroupsApi;
pub use reports::ReportsApi;
pub use shares::SharesApi;
pub use user::UserApi;
