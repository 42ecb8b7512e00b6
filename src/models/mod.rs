pub mod auth;
pub mod branding;
pub mod common;
pub mod config;
pub mod groups;
pub mod reports;
pub mod shares;
pub mod user;
