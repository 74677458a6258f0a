//! Mod metadata aggregation across mod sites, plus cached latest-release
//! lookup for a repository on a code-hosting platform.

pub mod config;
pub mod error;
pub mod logging;
pub mod release;
pub mod repository;
