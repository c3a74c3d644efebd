//! Herodex - superhero browser over a remote REST API
//!
//! The interesting part lives in [`service`]: a caching data service that
//! deduplicates concurrent requests, serves repeat reads without network
//! access and prefetches detail records after a list load. The rest is a
//! thin API client plus CLI presentation.

pub mod api;
pub mod error;
pub mod formatters;
pub mod models;
pub mod service;

// Re-export commonly used items
pub use api::{HeroApi, DEFAULT_API_URL};
pub use error::{HeroError, HeroResult};
pub use formatters::{format_hero_detail, format_hero_page};
pub use models::{Hero, HeroPage};
pub use service::{image_url, HeroService, PLACEHOLDER_IMAGE};
