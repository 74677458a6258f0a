//! Mod repository implementations

pub mod content_site;

pub use content_site::ContentSiteRepository;
