//! Mod metadata lookup across mod sites
//!
//! Each mod site is wrapped by a [`repository::ModRepository`] that validates
//! IDs, calls the site through its [`client::ModSiteClient`], and normalizes
//! the response into a [`model::ModInfoModel`]. Failures never escape a
//! repository; they come back as a model carrying an error reason.
//!
//! # Modules
//!
//! - [`client`]: Client trait for fetching raw mod records
//! - [`clients`]: Concrete client implementations
//! - [`dispatch`]: Vendor key to repository routing
//! - [`model`]: The normalized lookup result
//! - [`repository`]: The repository trait
//! - [`repositories`]: Concrete repository implementations
//! - [`version`]: Version normalization shared by all repositories

pub mod client;
pub mod clients;
pub mod dispatch;
pub mod model;
pub mod repositories;
pub mod repository;
pub mod version;
