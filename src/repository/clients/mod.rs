//! Mod site client implementations

pub mod mod_site;

pub use mod_site::HttpModSiteClient;
