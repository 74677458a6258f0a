//! Latest release lookup for a repository on a code-hosting platform
//!
//! # Modules
//!
//! - [`assets`]: Installer download URL extraction
//! - [`cache`]: Single-flight TTL cache in front of the release API
//! - [`client`]: Release API trait and GitHub implementation
//! - [`service`]: Cache and asset extraction for one configured repository
//! - [`types`]: Release and asset models

pub mod assets;
pub mod cache;
pub mod client;
pub mod service;
pub mod types;
